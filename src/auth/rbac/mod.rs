//! Role-Based Access Control (RBAC) data layer
//!
//! Roles and their per-resource permission flags live in the relational
//! store. [`PermissionRepository`] optionally caches lookups by role name,
//! and the predicates in [`authorization`] answer "can X" questions
//! against a loaded permission list.

pub mod authorization;
mod helpers;
mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use authorization::{can_create, can_delete, can_read, can_update, evaluate};
pub use permissions::{PermissionRepository, cache_key};
pub use roles::RoleRepository;
pub use system::{RbacSystem, RbacSystemBuilder};
pub use types::{Action, Decision, Flag, NewPermission, Permission, Role};
