//! Short-link configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Smallest accepted short-code length.
pub const MIN_CODE_LENGTH: usize = 4;
/// Largest accepted short-code length.
pub const MAX_CODE_LENGTH: usize = 32;

/// Short-link feature configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLinkConfig {
    /// Whether short links are issued at all (`SHORTLINK_ENABLED`).
    #[serde(default)]
    pub enabled: bool,
    /// Store backend: `"memory"` or `"redis"` (`SHORTLINK_BACKEND`).
    #[serde(default = "default_backend")]
    pub backend: String,
    /// URL path prefix for short codes (`SHORTLINK_PUBLIC_PREFIX`).
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Number of characters in a generated code.
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// How many codes to try before giving up on a collision streak.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Lifetime of a short link in seconds; `0` keeps links forever.
    #[serde(default)]
    pub ttl_seconds: u64,
    /// Hand out the long URL instead of failing when short links are off.
    #[serde(default = "default_true")]
    pub fallback_to_long_url: bool,
    /// In-memory backend settings.
    #[serde(default)]
    pub memory: MemoryStoreConfig,
    /// Redis backend settings.
    #[serde(default)]
    pub redis: RedisStoreConfig,
}

impl Default for ShortLinkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            backend: default_backend(),
            public_prefix: default_public_prefix(),
            code_length: default_code_length(),
            max_attempts: default_max_attempts(),
            ttl_seconds: 0,
            fallback_to_long_url: true,
            memory: MemoryStoreConfig::default(),
            redis: RedisStoreConfig::default(),
        }
    }
}

impl ShortLinkConfig {
    /// Entry lifetime, `None` when links never expire.
    pub fn ttl(&self) -> Option<Duration> {
        (self.ttl_seconds > 0).then(|| Duration::from_secs(self.ttl_seconds))
    }

    /// Checks ranges and the prefix shape.
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            return Err(AppError::configuration(format!(
                "shortlink.code_length must be between {MIN_CODE_LENGTH} and {MAX_CODE_LENGTH}, got {}",
                self.code_length
            )));
        }
        if self.max_attempts == 0 {
            return Err(AppError::configuration(
                "shortlink.max_attempts must be at least 1",
            ));
        }
        if self.public_prefix.len() < 2 || !self.public_prefix.starts_with('/') {
            return Err(AppError::configuration(format!(
                "SHORTLINK_PUBLIC_PREFIX must be a non-root path such as '/s', got '{}'",
                self.public_prefix
            )));
        }
        if !is_path_safe(&self.public_prefix) {
            return Err(AppError::configuration(format!(
                "SHORTLINK_PUBLIC_PREFIX may only contain letters, digits, '-', '_', '.', '~' \
                 and single '/' separators, got '{}'",
                self.public_prefix
            )));
        }
        if self.public_prefix == "/verify"
            || self.public_prefix == "/api"
            || self.public_prefix.starts_with("/api/")
        {
            return Err(AppError::configuration(format!(
                "SHORTLINK_PUBLIC_PREFIX '{}' collides with a built-in route",
                self.public_prefix
            )));
        }
        Ok(())
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStoreConfig {
    /// Maximum number of short links held in memory.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

/// Redis store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisStoreConfig {
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Prefix prepended to every short-link key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// Whether every segment of `prefix` is non-empty and made of RFC 3986
/// unreserved characters, so it is a literal route path.
fn is_path_safe(prefix: &str) -> bool {
    prefix.split('/').skip(1).all(|segment| {
        !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'))
    })
}

/// Ensure a leading slash and strip trailing slashes.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    format!("/{trimmed}")
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_public_prefix() -> String {
    "/s".to_string()
}

fn default_code_length() -> usize {
    8
}

fn default_max_attempts() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_max_capacity() -> u64 {
    100_000
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "verilink:".to_string()
}
