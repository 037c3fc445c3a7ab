use crate::config::DatabaseConfig;
use crate::utils::error::{RbacError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Open a new connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt)
            .await
            .map_err(RbacError::Database)?;

        let database = Self::from_connection(db)?;
        info!(
            "Database connection established ({:?})",
            database.backend_type
        );
        Ok(database)
    }

    /// Wrap a connection opened by the embedding service
    pub fn from_connection(db: DatabaseConnection) -> Result<Self> {
        let backend_type = match db.get_database_backend() {
            DbBackend::Postgres => DatabaseBackendType::PostgreSQL,
            DbBackend::Sqlite => DatabaseBackendType::SQLite,
            other => {
                return Err(RbacError::Config(format!(
                    "Unsupported database backend: {:?}",
                    other
                )));
            }
        };

        Ok(Self { db, backend_type })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            RbacError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(RbacError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::Role::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(RbacError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}
