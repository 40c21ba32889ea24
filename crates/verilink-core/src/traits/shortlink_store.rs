//! Short-link store trait for pluggable code-to-token backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Backend holding the `code -> token` table behind short links.
///
/// Entries are written once and read many times. Implementations own key
/// prefixing and TTL enforcement.
#[async_trait]
pub trait ShortLinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Look up the token stored under `code`.
    ///
    /// Returns `None` if the code was never issued or has expired.
    async fn get(&self, code: &str) -> AppResult<Option<String>>;

    /// Store `token` under `code` unless the code is already taken.
    ///
    /// The check and the write are a single atomic step. Returns `true` if
    /// the entry was written, `false` if `code` already existed.
    async fn put(&self, code: &str, token: &str, ttl: Option<Duration>) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
