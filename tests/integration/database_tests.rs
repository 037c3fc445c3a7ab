//! Database integration tests
//!
//! Tests database operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::database::test_db_config;
    use rbac_store::storage::database::{Database, DatabaseBackendType};
    use rbac_store::{Flag, NewPermission, RbacError};
    use uuid::Uuid;

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = Database::new(&test_db_config()).await;
        assert!(db.is_ok(), "Failed to create database: {:?}", db.err());

        let db = db.unwrap();
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);

        // Run migrations first to create required tables
        let migrate_result = db.migrate().await;
        assert!(
            migrate_result.is_ok(),
            "Migration failed: {:?}",
            migrate_result.err()
        );

        let health = db.health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Migrations can be applied twice
    #[tokio::test]
    async fn test_database_migration_is_idempotent() {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create database");
        assert!(db.migrate().await.is_ok());
        assert!(db.migrate().await.is_ok());
    }

    #[tokio::test]
    async fn test_health_check_fails_without_schema() {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create database");

        let result = db.health_check().await;
        assert!(matches!(result, Err(RbacError::Database(_))));
    }

    /// Flags survive the nullable boolean columns
    #[tokio::test]
    async fn test_tri_state_flags_round_trip_through_store() {
        let db = Database::new(&test_db_config()).await.unwrap();
        db.migrate().await.unwrap();

        let role_id = db.insert_role("editor", "Editors").await.unwrap();
        let payload = NewPermission {
            resource: "articles".to_string(),
            is_create: Flag::Enabled,
            is_read: Flag::Disabled,
            is_update: Flag::Unset,
            is_delete: Flag::Enabled,
            created_by: Some("seed".to_string()),
        };
        db.replace_permissions(role_id, &[payload], false)
            .await
            .unwrap();

        let stored = db.find_permissions_by_role_id(role_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].is_create, Flag::Enabled);
        assert_eq!(stored[0].is_read, Flag::Disabled);
        assert_eq!(stored[0].is_update, Flag::Unset);
        assert_eq!(stored[0].is_delete, Flag::Enabled);
        assert_eq!(stored[0].created_by.as_deref(), Some("seed"));
        assert_eq!(stored[0].role_id, role_id);
    }

    /// The permissions foreign key rejects unknown roles
    #[tokio::test]
    async fn test_permission_requires_existing_role() {
        let db = Database::new(&test_db_config()).await.unwrap();
        db.migrate().await.unwrap();

        let result = db
            .replace_permissions(Uuid::new_v4(), &[NewPermission::new("articles")], false)
            .await;
        assert!(matches!(result, Err(RbacError::Database(_))));
    }

    #[tokio::test]
    async fn test_find_role_by_unknown_id() {
        let db = Database::new(&test_db_config()).await.unwrap();
        db.migrate().await.unwrap();

        let role = db.find_role_by_id(Uuid::new_v4()).await.unwrap();
        assert!(role.is_none());
    }

    #[tokio::test]
    async fn test_replace_with_empty_list_keeps_existing_rows() {
        let db = Database::new(&test_db_config()).await.unwrap();
        db.migrate().await.unwrap();

        let role_id = db.insert_role("viewer", "Viewers").await.unwrap();
        db.replace_permissions(role_id, &[NewPermission::new("articles")], false)
            .await
            .unwrap();

        let result = db.replace_permissions(role_id, &[], false).await;
        assert!(matches!(result, Err(RbacError::EmptyInput(_))));

        let stored = db.find_permissions_by_role_id(role_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].resource, "articles");
    }
}
