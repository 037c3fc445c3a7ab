//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which cache backs permission lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process cache
    #[default]
    Memory,
    /// Shared Redis cache
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable caching of permission lookups
    #[serde(default)]
    pub enabled: bool,
    /// Cache backend
    #[serde(default)]
    pub backend: CacheBackend,
    /// Maximum number of entries held by the in-process cache
    #[serde(default = "default_cache_max_size")]
    pub max_size: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            backend: CacheBackend::default(),
            max_size: default_cache_max_size(),
        }
    }
}

impl CacheConfig {
    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.enabled {
            self.enabled = other.enabled;
        }
        if other.backend != CacheBackend::default() {
            self.backend = other.backend;
        }
        if other.max_size != default_cache_max_size() {
            self.max_size = other.max_size;
        }
        self
    }
}
