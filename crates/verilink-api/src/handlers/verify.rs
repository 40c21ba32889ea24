//! Public token verification.

use axum::Json;
use axum::extract::{Query, State};

use verilink_auth::{InvalidReason, VerifyOutcome};

use crate::dto::request::VerifyQuery;
use crate::state::AppState;

/// GET /verify?t=<token>
///
/// Always 200; the body says whether the token is authentic.
pub async fn verify(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Json<VerifyOutcome> {
    let outcome = match query.t.as_deref() {
        Some(token) => state.links.verify_token(token),
        None => VerifyOutcome::Invalid(InvalidReason::Malformed),
    };
    Json(outcome)
}
