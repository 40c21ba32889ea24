//! Redis short-link store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use verilink_core::error::{AppError, ErrorKind};
use verilink_core::result::AppResult;
use verilink_core::traits::ShortLinkStore;

use super::client::RedisClient;
use crate::keys;

/// Redis-backed short-link store for multi-instance deployments.
#[derive(Debug, Clone)]
pub struct RedisShortLinkStore {
    /// Redis client.
    client: RedisClient,
}

impl RedisShortLinkStore {
    /// Create a new Redis short-link store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Cache, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl ShortLinkStore for RedisShortLinkStore {
    async fn get(&self, code: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(&keys::short_link(code));
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn put(&self, code: &str, token: &str, ttl: Option<Duration>) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(&keys::short_link(code));
        let mut conn = self.client.conn_mut();

        // SET key token NX [EX ttl]
        let mut cmd = redis::cmd("SET");
        cmd.arg(&full_key).arg(token).arg("NX");
        if let Some(ttl) = ttl {
            cmd.arg("EX").arg(ttl.as_secs().max(1));
        }

        let result: Option<String> = cmd.query_async(&mut conn).await.map_err(Self::map_err)?;

        if result.is_none() {
            debug!(code, "Short code already taken");
        }
        Ok(result.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
