use crate::auth::rbac::Role;
use crate::utils::error::{RbacError, Result};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a role and return its generated ID
    pub async fn insert_role(&self, name: &str, description: &str) -> Result<Uuid> {
        debug!("Inserting role: {}", name);

        let id = Uuid::new_v4();
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let active_model = role::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            created_by: Set(None),
            updated_by: Set(None),
            deleted_by: Set(None),
        };

        entities::Role::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(RbacError::Database)?;

        Ok(id)
    }

    /// Update a role's name and description, stamping the updater
    pub async fn update_role(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
        updated_by: &str,
    ) -> Result<()> {
        debug!("Updating role: {}", id);

        let changes = role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            updated_at: Set(chrono::Utc::now().into()),
            updated_by: Set(Some(updated_by.to_string())),
            ..Default::default()
        };

        let result = entities::Role::update_many()
            .set(changes)
            .filter(role::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(RbacError::Database)?;

        expect_rows(result.rows_affected, "update role", id)
    }

    /// Remove a role row; its permissions cascade
    pub async fn hard_delete_role(&self, id: Uuid) -> Result<()> {
        debug!("Hard deleting role: {}", id);

        let result = entities::Role::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(RbacError::Database)?;

        expect_rows(result.rows_affected, "hard delete role", id)
    }

    /// Mark a role deleted without removing the row
    pub async fn soft_delete_role(&self, id: Uuid, deleted_by: &str) -> Result<()> {
        debug!("Soft deleting role: {}", id);

        let changes = role::ActiveModel {
            deleted_at: Set(Some(chrono::Utc::now().into())),
            deleted_by: Set(Some(deleted_by.to_string())),
            ..Default::default()
        };

        let result = entities::Role::update_many()
            .set(changes)
            .filter(role::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(RbacError::Database)?;

        expect_rows(result.rows_affected, "soft delete role", id)
    }

    /// All roles in insertion order, soft-deleted ones included
    pub async fn find_all_roles(&self) -> Result<Vec<Role>> {
        debug!("Finding all roles");

        let models = entities::Role::find()
            .order_by_asc(role::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(RbacError::Database)?;

        Ok(models.iter().map(role::Model::to_domain_role).collect())
    }

    /// Find role by ID
    pub async fn find_role_by_id(&self, id: Uuid) -> Result<Option<Role>> {
        debug!("Finding role by ID: {}", id);

        let model = entities::Role::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(RbacError::Database)?;

        Ok(model.map(|model| model.to_domain_role()))
    }
}

fn expect_rows(rows_affected: u64, operation: &str, id: Uuid) -> Result<()> {
    if rows_affected == 0 {
        return Err(RbacError::no_rows_affected(format!(
            "{}: no role with id {}",
            operation, id
        )));
    }
    Ok(())
}
