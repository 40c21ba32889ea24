//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use verilink_core::config::AppConfig;
use verilink_service::LinkService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Link issuing and short-code resolution
    pub links: Arc<LinkService>,
    /// When the server started, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state, stamping the start time.
    pub fn new(config: AppConfig, links: LinkService) -> Self {
        Self {
            config: Arc::new(config),
            links: Arc::new(links),
            started_at: Instant::now(),
        }
    }

    /// Builds the link service from configuration and wraps it in state.
    pub async fn from_config(config: AppConfig) -> Result<Self, verilink_core::AppError> {
        let links = LinkService::from_config(&config).await?;
        Ok(Self::new(config, links))
    }
}
