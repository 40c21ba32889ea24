//! # verilink-core
//!
//! Core crate for Verilink. Contains the configuration schema, the
//! short-link store trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Verilink crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
