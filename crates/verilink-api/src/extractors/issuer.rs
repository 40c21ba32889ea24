//! `IssuerAuth` extractor: checks the bearer issuer key on link-issuing routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use subtle::ConstantTimeEq;

use verilink_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried the configured issuer key.
#[derive(Debug, Clone, Copy)]
pub struct IssuerAuth;

impl FromRequestParts<AppState> for IssuerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.server.issuer_key() else {
            return Err(AppError::authentication("Link issuing is not configured").into());
        };

        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        if !bool::from(presented.as_bytes().ct_eq(expected.as_bytes())) {
            tracing::warn!(path = %parts.uri.path(), "Rejected issuer key");
            return Err(AppError::authentication("Invalid issuer key").into());
        }

        Ok(IssuerAuth)
    }
}
