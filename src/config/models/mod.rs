//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

#![allow(missing_docs)]

pub mod cache;
pub mod logging;
pub mod rbac;
pub mod storage;

// Re-export all configuration types
pub use cache::*;
pub use logging::*;
pub use rbac::*;
pub use storage::*;

/// Default database URL
pub fn default_database_url() -> String {
    "postgresql://localhost/rbac".to_string()
}

/// Default Redis URL
pub fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_cache_max_size() -> u64 {
    10_000
}

pub fn default_log_level() -> String {
    "info".to_string()
}
