//! Store manager that dispatches to the configured short-link backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use verilink_core::config::shortlink::ShortLinkConfig;
use verilink_core::error::AppError;
use verilink_core::result::AppResult;
use verilink_core::traits::ShortLinkStore;

/// Short-link store manager wrapping the configured backend.
///
/// The backend is selected at construction time based on configuration;
/// request handling never branches on the backend name.
#[derive(Debug, Clone)]
pub struct ShortLinkStoreManager {
    /// The inner store.
    inner: Arc<dyn ShortLinkStore>,
}

impl ShortLinkStoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &ShortLinkConfig) -> AppResult<Self> {
        let inner: Arc<dyn ShortLinkStore> = match config.backend.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis short-link store");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisShortLinkStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!(
                    max_capacity = config.memory.max_capacity,
                    "Initializing in-memory short-link store"
                );
                Arc::new(crate::memory::MemoryShortLinkStore::new(&config.memory))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown short-link backend: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl ShortLinkStore for ShortLinkStoreManager {
    async fn get(&self, code: &str) -> AppResult<Option<String>> {
        self.inner.get(code).await
    }

    async fn put(&self, code: &str, token: &str, ttl: Option<Duration>) -> AppResult<bool> {
        self.inner.put(code, token, ttl).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    fn backend(&self) -> &'static str {
        self.inner.backend()
    }
}
