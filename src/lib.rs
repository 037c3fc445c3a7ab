//! # rbac-store
//!
//! Role-based access control data layer backed by a relational store.
//!
//! ## Features
//!
//! - **Roles**: create, update, hard and soft delete, audit columns
//! - **Permissions**: tri-state create/read/update/delete flags per role and resource,
//!   replaced wholesale in one transaction
//! - **Cached lookups**: role name and resource lookups through moka or Redis
//! - **Authorization predicates**: OR-ed "can X" checks with cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rbac_store::{Config, NewPermission, RbacSystem, can_read};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/rbac.yaml").await?;
//!     let rbac = RbacSystem::from_config(&config).await?;
//!     let cancel = CancellationToken::new();
//!
//!     let admin = rbac.roles().create("admin", "Administrators", &cancel).await?;
//!     rbac.permissions()
//!         .create_permissions(admin, &[NewPermission::with_all("articles", true)], &cancel)
//!         .await?;
//!
//!     let permissions = rbac
//!         .permissions()
//!         .get_permissions_by_resource_name_and_role_ids("articles", &[admin], &cancel)
//!         .await?;
//!     assert!(can_read(&permissions, &cancel));
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    Action, Decision, Flag, NewPermission, Permission, PermissionRepository, RbacSystem,
    RbacSystemBuilder, Role, RoleRepository, can_create, can_delete, can_read, can_update,
    evaluate,
};
pub use config::Config;
pub use storage::StorageLayer;
pub use storage::cache::{MemoryCache, PERMISSION_CACHE_TTL, PermissionCache};
pub use utils::error::{RbacError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
