//! Cache and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.backend == CacheBackend::Memory && self.max_size == 0 {
            return Err("Cache max size must be greater than 0".to_string());
        }

        if self.enabled && self.backend == CacheBackend::Redis && !cfg!(feature = "redis") {
            return Err("Redis cache backend requires the `redis` feature".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let supported_levels = ["trace", "debug", "info", "warn", "error"];
        if !supported_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Unsupported log level: {}. Supported levels: {:?}",
                self.level, supported_levels
            ));
        }

        Ok(())
    }
}
