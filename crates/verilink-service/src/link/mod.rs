//! Verification link issuing and short-link resolution.

pub mod code;
pub mod service;

pub use code::CodeGenerator;
pub use service::{IssuedLink, LinkService};
