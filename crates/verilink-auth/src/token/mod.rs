//! Verification token creation and validation.

pub mod codec;
pub mod outcome;
pub mod payload;

pub use codec::TokenCodec;
pub use outcome::{InvalidReason, VerifyOutcome};
pub use payload::{PAYLOAD_VERSION, VerifyFields, VerifyPayload};
