//! Token signing and verification URL configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Secrets shorter than this are accepted but logged as weak.
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Verification token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// HMAC-SHA256 key for verification tokens (`VERIFY_HMAC_SECRET`).
    #[serde(default)]
    pub hmac_secret: String,
    /// Public base URL that verification links are built on (`BASE_URL`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            hmac_secret: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl VerifyConfig {
    /// Fails when the secret is absent or the base URL is unusable.
    pub fn validate(&self) -> AppResult<()> {
        if self.hmac_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "VERIFY_HMAC_SECRET is not set; refusing to sign tokens with an empty key",
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::configuration(format!(
                "BASE_URL must be an absolute http(s) URL, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Whether the secret is shorter than [`RECOMMENDED_SECRET_LEN`].
    pub fn is_weak_secret(&self) -> bool {
        self.hmac_secret.len() < RECOMMENDED_SECRET_LEN
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
