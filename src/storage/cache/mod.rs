//! Permission cache backends
//!
//! Permission lookups are cached as JSON strings under string keys with a
//! per-entry expiry. Two backends implement [`PermissionCache`]:
//!
//! - `memory` - in-process moka cache
//! - `redis` - shared Redis cache (feature `redis`, see [`crate::storage::redis`])

mod memory;

pub use memory::MemoryCache;

use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

/// Expiry of cached permission lookups
pub const PERMISSION_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Key-value cache used by the permission repository
#[async_trait]
pub trait PermissionCache: Send + Sync + Debug {
    /// Get a value, `None` on a miss or an expired entry
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value that expires after `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Check the backend is reachable. Defaults to reading an unused key.
    async fn health_check(&self) -> Result<()> {
        self.get("__rbac_health_check").await.map(|_| ())
    }

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
