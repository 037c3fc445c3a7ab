//! Redis permission cache
//!
//! ## Module Structure
//!
//! - `pool` - Connection management and health checks
//! - `cache` - [`PermissionCache`](crate::storage::cache::PermissionCache) implementation
//! - `tests` - Module tests

mod cache;
mod pool;

pub use pool::{RedisConnection, RedisPool};
