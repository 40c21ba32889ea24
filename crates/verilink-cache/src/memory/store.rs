//! In-memory short-link store using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use tracing::debug;

use verilink_core::config::shortlink::MemoryStoreConfig;
use verilink_core::result::AppResult;
use verilink_core::traits::ShortLinkStore;

/// A stored token together with its own lifetime.
#[derive(Debug, Clone)]
struct StoredLink {
    token: String,
    ttl: Option<Duration>,
}

/// Per-entry expiry driven by the TTL recorded at insert time.
struct PerEntryTtl;

impl Expiry<String, StoredLink> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredLink,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// In-memory short-link store for tests and single-instance deployments.
///
/// Entries live until their TTL elapses or the capacity bound evicts them.
#[derive(Debug, Clone)]
pub struct MemoryShortLinkStore {
    cache: Cache<String, StoredLink>,
}

impl MemoryShortLinkStore {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryStoreConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache }
    }
}

#[async_trait]
impl ShortLinkStore for MemoryShortLinkStore {
    async fn get(&self, code: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(code).await.map(|link| link.token))
    }

    async fn put(&self, code: &str, token: &str, ttl: Option<Duration>) -> AppResult<bool> {
        let link = StoredLink {
            token: token.to_string(),
            ttl,
        };

        // `or_insert_with` runs the init future for at most one caller per key.
        let entry = self
            .cache
            .entry(code.to_string())
            .or_insert_with(async move { link })
            .await;

        if !entry.is_fresh() {
            debug!(code, "Short code already taken");
        }
        Ok(entry.is_fresh())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
