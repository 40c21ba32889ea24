//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use verilink_auth::VerifyFields;

/// `POST /api/links` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Document identifier.
    #[validate(length(min = 1, max = 256, message = "document_id is required"))]
    pub document_id: String,
    /// Signature identifier.
    #[validate(length(min = 1, max = 256, message = "signature_id is required"))]
    pub signature_id: String,
    /// Identifier of the signing user.
    #[validate(length(min = 1, max = 256, message = "user_id is required"))]
    pub user_id: String,
    /// Also issue a short link.
    #[serde(default)]
    pub short: bool,
}

impl CreateLinkRequest {
    /// The identifying fields to sign.
    pub fn fields(&self) -> VerifyFields {
        VerifyFields::new(&self.document_id, &self.signature_id, &self.user_id)
    }
}

/// `GET /verify` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyQuery {
    /// The token to verify.
    pub t: Option<String>,
}
