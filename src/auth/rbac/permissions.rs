//! Permission repository
//!
//! Lookups by role name and resource go through the optional cache
//! (cache-aside). Every other read hits the store directly.

use crate::storage::cache::{PERMISSION_CACHE_TTL, PermissionCache};
use crate::storage::database::Database;
use crate::utils::error::{RbacError, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use super::helpers::run_cancellable;
use super::types::{NewPermission, Permission};

/// Cache key for a role name and resource lookup
pub fn cache_key(role_name: &str, resource: &str) -> String {
    format!(
        "ReadPermissionsByRoleNameAndResourceName.{}.{}",
        role_name, resource
    )
}

/// Reads and wholesale replacement of permission records
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    db: Arc<Database>,
    cache: Option<Arc<dyn PermissionCache>>,
    require_existing_permissions: bool,
}

impl PermissionRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            cache: None,
            require_existing_permissions: false,
        }
    }

    /// Serve role name and resource lookups through `cache`
    pub fn with_cache(mut self, cache: Arc<dyn PermissionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Make `create_permissions` fail when the role had nothing to replace
    pub fn require_existing_permissions(mut self, require: bool) -> Self {
        self.require_existing_permissions = require;
        self
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// All permissions of a role; empty when it has none
    pub async fn read_by_role_id(
        &self,
        role_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Permission>> {
        run_cancellable(
            cancel,
            "read permissions",
            self.db.find_permissions_by_role_id(role_id),
        )
        .await
    }

    /// The permission a named role holds on `resource`.
    ///
    /// A cache hit is returned as is. On a miss the store is queried and the
    /// row cached for [`PERMISSION_CACHE_TTL`]. Missing rows are never cached.
    pub async fn read_by_role_name_and_resource(
        &self,
        role_name: &str,
        resource: &str,
        cancel: &CancellationToken,
    ) -> Result<Permission> {
        let key = cache_key(role_name, resource);

        if let Some(cache) = &self.cache {
            match run_cancellable(cancel, "read cached permission", cache.get(&key)).await {
                Ok(Some(cached)) => {
                    debug!("Permission cache hit: {}", key);
                    return Ok(serde_json::from_str(&cached)?);
                }
                Ok(None) => debug!("Permission cache miss: {}", key),
                Err(e @ RbacError::Cancelled(_)) => return Err(e),
                Err(e) => warn!("Permission cache read failed for {}: {}", key, e),
            }
        }

        let permission = run_cancellable(
            cancel,
            "read permission",
            self.db
                .find_permission_by_role_name_and_resource(role_name, resource),
        )
        .await?
        .ok_or_else(|| {
            RbacError::not_found(format!(
                "no permission for role {} on resource {}",
                role_name, resource
            ))
        })?;

        if let Some(cache) = &self.cache {
            let value = serde_json::to_string(&permission)?;
            let stored = run_cancellable(
                cancel,
                "cache permission",
                cache.set(&key, &value, PERMISSION_CACHE_TTL),
            )
            .await;
            if let Err(e) = stored {
                warn!("Failed to cache permission {}: {}", key, e);
            }
        }

        Ok(permission)
    }

    /// Replace every permission of a role with `permissions` in one transaction.
    ///
    /// An empty list fails with `EmptyInput` and leaves the role untouched.
    /// Cached role name lookups are not invalidated and may serve the old
    /// flags until they expire.
    pub async fn create_permissions(
        &self,
        role_id: Uuid,
        permissions: &[NewPermission],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let replaced = run_cancellable(
            cancel,
            "create permissions",
            self.db.replace_permissions(
                role_id,
                permissions,
                self.require_existing_permissions,
            ),
        )
        .await?;

        debug!(
            "Role {} now has {} permissions ({} replaced)",
            role_id,
            permissions.len(),
            replaced
        );
        Ok(())
    }

    /// Permissions on `resource` held by any of the named roles
    pub async fn get_permissions_by_resource_name_and_role_names(
        &self,
        resource: &str,
        role_names: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<Permission>> {
        if role_names.is_empty() {
            return Err(RbacError::empty_input("roleNames is empty"));
        }

        let permissions = run_cancellable(
            cancel,
            "read permissions by role names",
            self.db
                .find_permissions_by_resource_and_role_names(resource, role_names),
        )
        .await?;

        non_empty(permissions, resource)
    }

    /// Permissions on `resource` held by any of the given role IDs
    pub async fn get_permissions_by_resource_name_and_role_ids(
        &self,
        resource: &str,
        role_ids: &[Uuid],
        cancel: &CancellationToken,
    ) -> Result<Vec<Permission>> {
        if role_ids.is_empty() {
            return Err(RbacError::empty_input("roleIds is empty"));
        }

        let permissions = run_cancellable(
            cancel,
            "read permissions by role IDs",
            self.db
                .find_permissions_by_resource_and_role_ids(resource, role_ids),
        )
        .await?;

        non_empty(permissions, resource)
    }
}

fn non_empty(permissions: Vec<Permission>, resource: &str) -> Result<Vec<Permission>> {
    if permissions.is_empty() {
        return Err(RbacError::no_result_found(format!(
            "no permissions found for resource {}",
            resource
        )));
    }
    Ok(permissions)
}
