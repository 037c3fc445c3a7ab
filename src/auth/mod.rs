//! Authorization
//!
//! Role and permission storage plus the authorization predicates.

pub mod rbac;

pub use rbac::{
    Action, Decision, Flag, NewPermission, Permission, PermissionRepository, RbacSystem,
    RbacSystemBuilder, Role, RoleRepository,
};
