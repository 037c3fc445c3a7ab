use crate::auth::rbac::{NewPermission, Permission};
use crate::utils::error::{RbacError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, permission, role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// All permissions attached to a role
    pub async fn find_permissions_by_role_id(&self, role_id: Uuid) -> Result<Vec<Permission>> {
        debug!("Finding permissions by role ID: {}", role_id);

        let models = entities::Permission::find()
            .filter(permission::Column::RoleId.eq(role_id))
            .all(&self.db)
            .await
            .map_err(RbacError::Database)?;

        Ok(to_domain(models))
    }

    /// The permission a role (by name) holds on one resource
    pub async fn find_permission_by_role_name_and_resource(
        &self,
        role_name: &str,
        resource: &str,
    ) -> Result<Option<Permission>> {
        debug!(
            "Finding permission by role name: {}, resource: {}",
            role_name, resource
        );

        let model = entities::Permission::find()
            .inner_join(entities::Role)
            .filter(role::Column::Name.eq(role_name))
            .filter(permission::Column::Resource.eq(resource))
            .one(&self.db)
            .await
            .map_err(RbacError::Database)?;

        Ok(model.map(|model| model.to_domain_permission()))
    }

    /// Permissions on one resource held by any of the named roles
    pub async fn find_permissions_by_resource_and_role_names(
        &self,
        resource: &str,
        role_names: &[String],
    ) -> Result<Vec<Permission>> {
        debug!(
            "Finding permissions by resource: {}, role names: {:?}",
            resource, role_names
        );

        let models = entities::Permission::find()
            .inner_join(entities::Role)
            .filter(role::Column::Name.is_in(role_names.iter().cloned()))
            .filter(permission::Column::Resource.eq(resource))
            .all(&self.db)
            .await
            .map_err(RbacError::Database)?;

        Ok(to_domain(models))
    }

    /// Permissions on one resource held by any of the given role IDs
    pub async fn find_permissions_by_resource_and_role_ids(
        &self,
        resource: &str,
        role_ids: &[Uuid],
    ) -> Result<Vec<Permission>> {
        debug!(
            "Finding permissions by resource: {}, role IDs: {:?}",
            resource, role_ids
        );

        let models = entities::Permission::find()
            .filter(permission::Column::RoleId.is_in(role_ids.iter().copied()))
            .filter(permission::Column::Resource.eq(resource))
            .all(&self.db)
            .await
            .map_err(RbacError::Database)?;

        Ok(to_domain(models))
    }

    /// Replace every permission of a role in one transaction.
    ///
    /// Returns the number of rows removed. With `require_existing` set, a role
    /// that had no rows fails with `NoRowsAffected` and nothing is written.
    /// An empty list fails with `EmptyInput` before a transaction is opened.
    pub async fn replace_permissions(
        &self,
        role_id: Uuid,
        permissions: &[NewPermission],
        require_existing: bool,
    ) -> Result<u64> {
        debug!(
            "Replacing permissions for role {} with {} rows",
            role_id,
            permissions.len()
        );

        if permissions.is_empty() {
            return Err(RbacError::empty_input("permissions is empty"));
        }

        // Dropping the transaction on any early return rolls it back
        let txn = self.db.begin().await.map_err(RbacError::Database)?;

        let deleted = entities::Permission::delete_many()
            .filter(permission::Column::RoleId.eq(role_id))
            .exec(&txn)
            .await
            .map_err(RbacError::Database)?
            .rows_affected;

        if deleted == 0 && require_existing {
            txn.rollback().await.map_err(RbacError::Database)?;
            return Err(RbacError::no_rows_affected(format!(
                "no permissions to replace for role {}",
                role_id
            )));
        }

        let models = permissions
            .iter()
            .map(|p| permission::Model::from_new_permission(role_id, p));

        entities::Permission::insert_many(models)
            .exec_without_returning(&txn)
            .await
            .map_err(RbacError::Database)?;

        txn.commit().await.map_err(RbacError::Database)?;

        debug!(
            "Replaced {} permissions of role {} with {}",
            deleted,
            role_id,
            permissions.len()
        );
        Ok(deleted)
    }
}

fn to_domain(models: Vec<permission::Model>) -> Vec<Permission> {
    models
        .iter()
        .map(permission::Model::to_domain_permission)
        .collect()
}
