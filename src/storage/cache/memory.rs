//! In-process permission cache

use super::PermissionCache;
use crate::utils::error::Result;
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CachedEntry {
    value: String,
    ttl: Duration,
}

/// Expires each entry after the TTL it was stored with
struct EntryTtl;

impl Expiry<String, CachedEntry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CachedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    // An overwrite restarts the clock with the new TTL
    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CachedEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// moka-backed cache with per-entry expiry
#[derive(Debug, Clone)]
pub struct MemoryCache {
    entries: Cache<String, CachedEntry>,
}

impl MemoryCache {
    /// Create a cache holding at most `max_size` entries
    pub fn new(max_size: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_size)
                .expire_after(EntryTtl)
                .build(),
        }
    }

    /// Number of live entries, exact after [`MemoryCache::run_pending_tasks`]
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Apply pending evictions and expirations now
    pub async fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks().await;
    }
}

#[async_trait]
impl PermissionCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let entry = CachedEntry {
            value: value.to_string(),
            ttl,
        };
        self.entries.insert(key.to_string(), entry).await;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
