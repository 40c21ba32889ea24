//! The authenticated content of a verification token.

use serde::{Deserialize, Serialize};

use verilink_core::error::AppError;
use verilink_core::result::AppResult;

/// Current payload schema version.
pub const PAYLOAD_VERSION: u32 = 1;

/// Identifying fields supplied by the caller when issuing a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyFields {
    /// Document identifier.
    pub document_id: String,
    /// Signature identifier.
    pub signature_id: String,
    /// Identifier of the signing user.
    pub user_id: String,
}

impl VerifyFields {
    /// Convenience constructor.
    pub fn new(
        document_id: impl Into<String>,
        signature_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            signature_id: signature_id.into(),
            user_id: user_id.into(),
        }
    }
}

/// Payload embedded in every token.
///
/// Serializes with the compact field names `d`, `s`, `u`, `v` in that
/// order. Fields are private so a built payload cannot be altered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyPayload {
    d: String,
    s: String,
    u: String,
    v: u32,
}

impl VerifyPayload {
    /// Builds a version-1 payload, rejecting empty identifiers.
    pub fn new(fields: &VerifyFields) -> AppResult<Self> {
        require_non_empty("document_id", &fields.document_id)?;
        require_non_empty("signature_id", &fields.signature_id)?;
        require_non_empty("user_id", &fields.user_id)?;

        Ok(Self {
            d: fields.document_id.clone(),
            s: fields.signature_id.clone(),
            u: fields.user_id.clone(),
            v: PAYLOAD_VERSION,
        })
    }

    /// Document identifier.
    pub fn document_id(&self) -> &str {
        &self.d
    }

    /// Signature identifier.
    pub fn signature_id(&self) -> &str {
        &self.s
    }

    /// Identifier of the signing user.
    pub fn user_id(&self) -> &str {
        &self.u
    }

    /// Schema version.
    pub fn version(&self) -> u32 {
        self.v
    }

    /// The identifying fields without the version.
    pub fn fields(&self) -> VerifyFields {
        VerifyFields::new(&self.d, &self.s, &self.u)
    }

    /// Whether all identifiers are present (used after decoding).
    pub(crate) fn is_complete(&self) -> bool {
        [&self.d, &self.s, &self.u]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

fn require_non_empty(name: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_payload(format!(
            "{name} must be a non-empty string"
        )));
    }
    Ok(())
}
