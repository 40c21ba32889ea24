//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{HealthResponse, StoreHealth};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let short_links = state
        .links
        .store_health()
        .await
        .map(|(backend, healthy)| StoreHealth {
            backend: backend.to_string(),
            healthy,
        });

    let status = match &short_links {
        Some(store) if !store.healthy => "degraded",
        _ => "ok",
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        short_links,
        checked_at: chrono::Utc::now(),
    })
}
