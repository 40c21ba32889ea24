//! # verilink-api
//!
//! HTTP API layer for Verilink built on Axum.
//!
//! Serves the public verification endpoint and short-link redirects, plus
//! the issuer-key protected endpoints that mint links. Includes the request
//! logging and CORS middleware, DTOs, and the `AppError` to HTTP mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
