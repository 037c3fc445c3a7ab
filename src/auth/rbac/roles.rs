//! Role repository

use crate::storage::database::Database;
use crate::utils::error::{RbacError, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use super::helpers::run_cancellable;
use super::types::Role;

/// CRUD over role records
#[derive(Debug, Clone)]
pub struct RoleRepository {
    db: Arc<Database>,
}

impl RoleRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a role and return its generated ID
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        cancel: &CancellationToken,
    ) -> Result<Uuid> {
        let id = run_cancellable(cancel, "create role", self.db.insert_role(name, description))
            .await?;
        debug!("Created role {} ({})", name, id);
        Ok(id)
    }

    /// Update name and description, recording `updated_by`.
    ///
    /// Fails with `NoRowsAffected` when no role has this ID.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
        updated_by: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        run_cancellable(
            cancel,
            "update role",
            self.db.update_role(id, name, description, updated_by),
        )
        .await
    }

    /// Remove the role row. Its permissions go with it.
    pub async fn hard_delete(&self, id: Uuid, cancel: &CancellationToken) -> Result<()> {
        run_cancellable(cancel, "hard delete role", self.db.hard_delete_role(id)).await
    }

    /// Stamp `deleted_at` and `deleted_by`, keeping the row
    pub async fn soft_delete(
        &self,
        id: Uuid,
        deleted_by: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        run_cancellable(cancel, "soft delete role", self.db.soft_delete_role(id, deleted_by)).await
    }

    /// Every role in insertion order, soft-deleted ones included
    pub async fn read_all(&self, cancel: &CancellationToken) -> Result<Vec<Role>> {
        run_cancellable(cancel, "read roles", self.db.find_all_roles()).await
    }

    pub async fn read_by_id(&self, id: Uuid, cancel: &CancellationToken) -> Result<Role> {
        run_cancellable(cancel, "read role", self.db.find_role_by_id(id))
            .await?
            .ok_or_else(|| RbacError::not_found(format!("role {} not found", id)))
    }
}
