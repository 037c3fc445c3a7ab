//! RBAC system assembly

use crate::config::Config;
use crate::storage::StorageLayer;
use crate::storage::cache::PermissionCache;
use crate::storage::database::Database;
use crate::utils::error::{RbacError, Result};
use std::sync::Arc;
use tracing::info;

use super::permissions::PermissionRepository;
use super::roles::RoleRepository;

/// Role and permission repositories sharing one store handle
#[derive(Debug, Clone)]
pub struct RbacSystem {
    roles: RoleRepository,
    permissions: PermissionRepository,
}

impl RbacSystem {
    /// Start assembling a system from pre-built handles
    pub fn builder() -> RbacSystemBuilder {
        RbacSystemBuilder::default()
    }

    /// Connect storage, run migrations and build the repositories
    pub async fn from_config(config: &Config) -> Result<Self> {
        info!("Initializing RBAC system");
        config.validate()?;

        let storage = StorageLayer::new(&config.storage, &config.cache).await?;
        storage.migrate().await?;

        let mut builder = Self::builder()
            .database(storage.database)
            .require_existing_permissions(config.rbac.require_existing_permissions);
        if let Some(cache) = storage.cache {
            builder = builder.cache(cache);
        }

        let system = builder.build()?;
        info!("RBAC system initialized successfully");
        Ok(system)
    }

    pub fn roles(&self) -> &RoleRepository {
        &self.roles
    }

    pub fn permissions(&self) -> &PermissionRepository {
        &self.permissions
    }
}

/// Builder for [`RbacSystem`]
#[derive(Debug, Default)]
pub struct RbacSystemBuilder {
    database: Option<Arc<Database>>,
    cache: Option<Arc<dyn PermissionCache>>,
    require_existing_permissions: bool,
}

impl RbacSystemBuilder {
    /// Store handle (required)
    pub fn database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }

    /// Cache for role name and resource lookups
    pub fn cache(mut self, cache: Arc<dyn PermissionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn require_existing_permissions(mut self, require: bool) -> Self {
        self.require_existing_permissions = require;
        self
    }

    pub fn build(self) -> Result<RbacSystem> {
        let database = self
            .database
            .ok_or_else(|| RbacError::config("RBAC system requires a database handle"))?;

        let mut permissions = PermissionRepository::new(database.clone())
            .require_existing_permissions(self.require_existing_permissions);
        if let Some(cache) = self.cache {
            info!("Permission cache enabled ({})", cache.backend_name());
            permissions = permissions.with_cache(cache);
        }

        Ok(RbacSystem {
            roles: RoleRepository::new(database),
            permissions,
        })
    }
}
