//! Route definitions for the Verilink HTTP API.
//!
//! Public routes sit at the root (`/verify`, `<prefix>/{code}`); management
//! routes are mounted under `/api`. The router receives `AppState` and passes
//! it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// The issuer routes are only mounted when an issuer key is configured.
pub fn build_router(state: AppState) -> Router {
    let mut api_routes = Router::new().merge(health_routes());
    if state.config.server.issuer_key().is_some() {
        api_routes = api_routes.merge(link_routes());
    } else {
        tracing::info!("No issuer key configured; /api/links is not mounted");
    }

    Router::new()
        .merge(verify_routes())
        .merge(short_link_routes(state.links.public_prefix()))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Public token verification
fn verify_routes() -> Router<AppState> {
    Router::new().route("/verify", get(handlers::verify::verify))
}

/// Public short-code redirects under the configured prefix
fn short_link_routes(prefix: &str) -> Router<AppState> {
    Router::new().route(
        &format!("{prefix}/{{code}}"),
        get(handlers::shortlink::redirect),
    )
}

/// Link issuing and inspection (issuer key)
fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(handlers::link::create_link))
        .route("/links/{code}", get(handlers::link::get_link))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
