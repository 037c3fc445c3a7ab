//! Configuration management for the RBAC store
//!
//! This module handles loading, validation, and merging of the store configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RbacError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the RBAC store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database and Redis connection settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Permission cache settings
    #[serde(default)]
    pub cache: CacheConfig,
    /// RBAC behaviour settings
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RbacError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| RbacError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections = max_conn
                .parse()
                .map_err(|e| RbacError::Config(format!("Invalid max connections: {}", e)))?;
        }
        if let Some(url) = lookup("REDIS_URL") {
            config.storage.redis.url = url;
        }
        if let Some(enabled) = lookup("RBAC_CACHE_ENABLED") {
            config.cache.enabled = enabled
                .parse()
                .map_err(|e| RbacError::Config(format!("Invalid cache enabled flag: {}", e)))?;
        }
        if let Some(backend) = lookup("RBAC_CACHE_BACKEND") {
            config.cache.backend = match backend.to_lowercase().as_str() {
                "memory" => CacheBackend::Memory,
                "redis" => CacheBackend::Redis,
                other => {
                    return Err(RbacError::Config(format!("Invalid cache backend: {}", other)));
                }
            };
        }
        if let Some(strict) = lookup("RBAC_REQUIRE_EXISTING_PERMISSIONS") {
            config.rbac.require_existing_permissions = strict.parse().map_err(|e| {
                RbacError::Config(format!("Invalid require_existing_permissions flag: {}", e))
            })?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        config.validate()?;
        debug!("Configuration loaded from environment variables");
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.storage
            .validate()
            .map_err(|e| RbacError::Config(format!("Storage config error: {}", e)))?;

        self.cache
            .validate()
            .map_err(|e| RbacError::Config(format!("Cache config error: {}", e)))?;

        if self.cache.enabled && self.cache.backend == CacheBackend::Redis {
            self.storage
                .redis
                .validate()
                .map_err(|e| RbacError::Config(format!("Redis config error: {}", e)))?;
        }

        self.logging
            .validate()
            .map_err(|e| RbacError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.storage = self.storage.merge(other.storage);
        self.cache = self.cache.merge(other.cache);
        self.rbac = self.rbac.merge(other.rbac);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RbacError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
