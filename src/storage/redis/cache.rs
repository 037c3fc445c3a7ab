//! Permission cache operations on Redis

use super::pool::RedisPool;
use crate::storage::cache::PermissionCache;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::debug;

#[async_trait]
impl PermissionCache for RedisPool {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection();
        let value: Option<String> = conn.conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.get_connection();
        // SETEX rejects a zero expiry
        let ttl_seconds = ttl.as_secs().max(1);
        let _: () = conn.conn.set_ex(key, value, ttl_seconds).await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        debug!("Performing Redis health check");
        let mut conn = self.get_connection();
        let _: String = redis::cmd("PING").query_async(&mut conn.conn).await?;

        debug!("Redis health check passed");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
