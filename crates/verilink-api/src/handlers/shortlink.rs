//! Public short-link redirects.

use axum::extract::{Path, State};
use axum::response::Redirect;

use verilink_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET <prefix>/{code}
///
/// 303 to the long verification URL, 404 when the code is unknown.
pub async fn redirect(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Redirect, ApiError> {
    let token = state
        .links
        .resolve_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Unknown short link"))?;

    Ok(Redirect::to(&state.links.urls().verify_url(&token)))
}
