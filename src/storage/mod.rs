//! Storage layer for the RBAC store
//!
//! This module provides the relational store and the permission cache backends.

/// Permission cache backends
pub mod cache;
/// Database storage module
pub mod database;
/// Redis cache module
#[cfg(feature = "redis")]
pub mod redis;

use crate::config::{CacheBackend, CacheConfig, StorageConfig};
use crate::utils::error::Result;
use cache::{MemoryCache, PermissionCache};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Store handle plus the optional permission cache
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
    /// Permission cache, absent when caching is disabled
    pub cache: Option<Arc<dyn PermissionCache>>,
}

impl StorageLayer {
    /// Connect the database and build the configured cache
    pub async fn new(storage: &StorageConfig, cache: &CacheConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&storage.database).await?);

        let cache = if cache.enabled {
            Some(Self::build_cache(storage, cache).await?)
        } else {
            debug!("Permission cache disabled");
            None
        };

        info!("Storage layer initialized successfully");
        Ok(Self { database, cache })
    }

    async fn build_cache(
        storage: &StorageConfig,
        cache: &CacheConfig,
    ) -> Result<Arc<dyn PermissionCache>> {
        match cache.backend {
            CacheBackend::Memory => {
                debug!("Using in-process permission cache (max {} entries)", cache.max_size);
                Ok(Arc::new(MemoryCache::new(cache.max_size)))
            }
            #[cfg(feature = "redis")]
            CacheBackend::Redis => {
                debug!("Connecting to Redis");
                Ok(Arc::new(redis::RedisPool::new(&storage.redis).await?))
            }
            #[cfg(not(feature = "redis"))]
            CacheBackend::Redis => {
                let _ = storage;
                Err(crate::utils::error::RbacError::config(
                    "redis cache backend requires the `redis` feature",
                ))
            }
        }
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.database.migrate().await
    }

    /// Health check for the store and the cache
    pub async fn health_check(&self) -> StorageHealthStatus {
        let mut status = StorageHealthStatus {
            database: false,
            cache: true,
            overall: false,
        };

        match self.database.health_check().await {
            Ok(_) => status.database = true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
            }
        }

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.health_check().await {
                warn!("{} cache health check failed: {}", cache.backend_name(), e);
                status.cache = false;
            }
        }

        status.overall = status.database && status.cache;
        status
    }

    /// Get database handle
    pub fn db(&self) -> &database::Database {
        &self.database
    }
}

/// Storage health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StorageHealthStatus {
    /// Database health status
    pub database: bool,
    /// Cache health status, `true` when no cache is configured
    pub cache: bool,
    /// Overall health status
    pub overall: bool,
}
