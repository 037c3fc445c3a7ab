//! Redis connection management
//!
//! A single multiplexed connection is shared by every clone of the pool.

use crate::config::RedisConfig;
use crate::utils::error::{RbacError, Result};
use redis::{Client, aio::MultiplexedConnection};
use std::time::Duration;
use tracing::{debug, info};

/// Redis connection pool
#[derive(Debug, Clone)]
pub struct RedisPool {
    pub(crate) connection_manager: MultiplexedConnection,
}

/// Redis connection wrapper
pub struct RedisConnection {
    pub(crate) conn: MultiplexedConnection,
}

impl RedisPool {
    /// Connect to Redis
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating Redis connection pool");
        debug!("Redis URL: {}", Self::sanitize_url(&config.url));

        let client = Client::open(config.url.as_str())?;

        let connection_manager = tokio::time::timeout(
            Duration::from_secs(config.connection_timeout),
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| {
            RbacError::cache(format!(
                "Timed out connecting to Redis after {}s",
                config.connection_timeout
            ))
        })??;

        info!("Redis connection pool created successfully");
        Ok(Self { connection_manager })
    }

    /// Get a connection from the pool
    pub fn get_connection(&self) -> RedisConnection {
        RedisConnection {
            conn: self.connection_manager.clone(),
        }
    }

    /// Sanitize Redis URL for logging (hide password)
    pub(crate) fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}
