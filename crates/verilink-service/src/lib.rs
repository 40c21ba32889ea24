//! # verilink-service
//!
//! Service layer for Verilink. [`LinkService`] orchestrates the token codec,
//! the verification URL builder and the short-link store to issue and
//! resolve verification links.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod link;

pub use link::{CodeGenerator, IssuedLink, LinkService};
