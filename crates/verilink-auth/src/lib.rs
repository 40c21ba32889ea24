//! # verilink-auth
//!
//! Tamper-evident verification tokens for signed federation documents.
//!
//! ## Modules
//!
//! - `token`: payload shape, HMAC-SHA256 token codec, verification outcome
//! - `url`: long and short verification URL construction

pub mod token;
pub mod url;

pub use token::{InvalidReason, TokenCodec, VerifyFields, VerifyOutcome, VerifyPayload};
pub use url::VerifyUrlBuilder;
