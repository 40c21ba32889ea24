//! Issuer endpoints: mint links and inspect short codes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use verilink_core::error::AppError;
use verilink_service::IssuedLink;

use crate::dto::request::CreateLinkRequest;
use crate::dto::response::ResolvedLinkResponse;
use crate::error::ApiError;
use crate::extractors::IssuerAuth;
use crate::state::AppState;

/// POST /api/links
pub async fn create_link(
    State(state): State<AppState>,
    _issuer: IssuerAuth,
    Json(req): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<IssuedLink>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let issued = state.links.issue(&req.fields(), req.short).await?;

    tracing::info!(
        document_id = %req.document_id,
        short = issued.short_url.is_some(),
        "Issued verification link"
    );

    Ok((StatusCode::CREATED, Json(issued)))
}

/// GET /api/links/{code}
pub async fn get_link(
    State(state): State<AppState>,
    _issuer: IssuerAuth,
    Path(code): Path<String>,
) -> Result<Json<ResolvedLinkResponse>, ApiError> {
    let token = state
        .links
        .resolve_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Short link '{code}' not found")))?;

    let verification = state.links.verify_token(&token);

    Ok(Json(ResolvedLinkResponse {
        code,
        token,
        verification,
    }))
}
