//! Result of verifying a token.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::payload::VerifyPayload;

/// Why a token was rejected. Kept for logging only; callers see `ok: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Not two non-empty dot-separated parts, or oversized.
    Malformed,
    /// The MAC does not match the payload.
    BadSignature,
    /// The payload could not be decoded or has empty identifiers.
    BadPayload,
    /// The payload carries a schema version this build does not know.
    UnsupportedVersion,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed"),
            Self::BadSignature => write!(f, "bad_signature"),
            Self::BadPayload => write!(f, "bad_payload"),
            Self::UnsupportedVersion => write!(f, "unsupported_version"),
        }
    }
}

/// Outcome of [`TokenCodec::verify_token`](super::TokenCodec::verify_token).
///
/// Serializes as `{"ok": true, "payload": {...}}` or `{"ok": false}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The token is authentic.
    Valid(VerifyPayload),
    /// The token was rejected.
    Invalid(InvalidReason),
}

impl VerifyOutcome {
    /// Whether the token was authentic.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The verified payload, if any.
    pub fn payload(&self) -> Option<&VerifyPayload> {
        match self {
            Self::Valid(payload) => Some(payload),
            Self::Invalid(_) => None,
        }
    }

    /// Consume the outcome, returning the verified payload if any.
    pub fn into_payload(self) -> Option<VerifyPayload> {
        match self {
            Self::Valid(payload) => Some(payload),
            Self::Invalid(_) => None,
        }
    }
}

impl Serialize for VerifyOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid(payload) => {
                let mut state = serializer.serialize_struct("VerifyOutcome", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("payload", payload)?;
                state.end()
            }
            Self::Invalid(_) => {
                let mut state = serializer.serialize_struct("VerifyOutcome", 1)?;
                state.serialize_field("ok", &false)?;
                state.end()
            }
        }
    }
}
