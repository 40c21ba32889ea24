//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use verilink_auth::VerifyOutcome;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the short-link store is unreachable.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
    /// Short-link store status; absent while short links are disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_links: Option<StoreHealth>,
    /// When this check ran.
    pub checked_at: DateTime<Utc>,
}

/// Short-link store status.
#[derive(Debug, Clone, Serialize)]
pub struct StoreHealth {
    /// Backend name.
    pub backend: String,
    /// Whether the backend answered.
    pub healthy: bool,
}

/// `GET /api/links/{code}` response.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLinkResponse {
    /// The short code.
    pub code: String,
    /// Token stored under the code.
    pub token: String,
    /// Result of verifying that token.
    pub verification: VerifyOutcome,
}
