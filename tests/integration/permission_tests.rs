//! Permission repository integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::{PermissionAssertions, by_resource};
    use crate::common::{PermissionFactory, TestDatabase};
    use crate::{assert_err, assert_ok};
    use rbac_store::{Action, Flag, RbacError, RbacSystem};
    use tokio_util::sync::CancellationToken;
    use uuid::Uuid;

    const ALL_ENABLED: [Flag; 4] = [Flag::Enabled; 4];
    const ALL_DISABLED: [Flag; 4] = [Flag::Disabled; 4];

    // ==================== CreatePermissions ====================

    #[tokio::test]
    async fn test_create_permissions_for_role_without_prior_rows() {
        let db = TestDatabase::new().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();
        let role = rbac.roles().create("editor", "", &cancel).await.unwrap();

        assert_ok!(
            rbac.permissions()
                .create_permissions(
                    role,
                    &[
                        PermissionFactory::reader("articles"),
                        PermissionFactory::admin("comments"),
                    ],
                    &cancel,
                )
                .await
        );

        let stored = by_resource(rbac.permissions().read_by_role_id(role, &cancel).await.unwrap());
        assert_eq!(stored.len(), 2);
        stored[0].assert_flags([Flag::Unset, Flag::Enabled, Flag::Unset, Flag::Disabled]);
        stored[1].assert_flags(ALL_ENABLED);
        assert!(stored.iter().all(|p| p.role_id == role));
        assert!(stored.iter().all(|p| p.created_by.as_deref() == Some("test-suite")));
    }

    #[tokio::test]
    async fn test_create_permissions_replaces_wholesale() {
        let (db, roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();

        rbac.permissions()
            .create_permissions(
                roles.admin,
                &[
                    PermissionFactory::only("reports", Action::Read),
                    PermissionFactory::denied("billing"),
                ],
                &cancel,
            )
            .await
            .unwrap();

        let stored = by_resource(
            rbac.permissions()
                .read_by_role_id(roles.admin, &cancel)
                .await
                .unwrap(),
        );
        let resources: Vec<&str> = stored.iter().map(|p| p.resource.as_str()).collect();
        assert_eq!(resources, ["billing", "reports"]);
        stored[0].assert_flags(ALL_DISABLED);
        stored[1].assert_flags([Flag::Unset, Flag::Enabled, Flag::Unset, Flag::Unset]);

        // The other role is untouched
        let user = rbac
            .permissions()
            .read_by_role_id(roles.user, &cancel)
            .await
            .unwrap();
        assert_eq!(user.len(), 1);
        user[0].assert_flags(ALL_DISABLED);
    }

    #[tokio::test]
    async fn test_create_permissions_empty_input() {
        let (db, roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();

        let err = assert_err!(
            rbac.permissions()
                .create_permissions(roles.admin, &[], &cancel)
                .await
        );
        assert!(matches!(err, RbacError::EmptyInput(_)));

        let stored = rbac
            .permissions()
            .read_by_role_id(roles.admin, &cancel)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        stored[0].assert_flags(ALL_ENABLED);
    }

    #[tokio::test]
    async fn test_require_existing_permissions_rolls_back() {
        let db = TestDatabase::new().await;
        let rbac = RbacSystem::builder()
            .database(db.db_arc())
            .require_existing_permissions(true)
            .build()
            .unwrap();
        let cancel = CancellationToken::new();
        let role = rbac.roles().create("editor", "", &cancel).await.unwrap();

        let err = assert_err!(
            rbac.permissions()
                .create_permissions(role, &[PermissionFactory::admin("articles")], &cancel)
                .await
        );
        assert!(matches!(err, RbacError::NoRowsAffected(_)));

        let stored = rbac.permissions().read_by_role_id(role, &cancel).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_require_existing_permissions_replaces_existing_rows() {
        let (db, roles) = TestDatabase::seeded().await;
        let rbac = RbacSystem::builder()
            .database(db.db_arc())
            .require_existing_permissions(true)
            .build()
            .unwrap();
        let cancel = CancellationToken::new();

        assert_ok!(
            rbac.permissions()
                .create_permissions(roles.user, &[PermissionFactory::admin("articles")], &cancel)
                .await
        );

        let stored = rbac
            .permissions()
            .read_by_role_id(roles.user, &cancel)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        stored[0].assert_flags(ALL_ENABLED);
    }

    #[tokio::test]
    async fn test_create_permissions_for_unknown_role_keeps_store() {
        let (db, _roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();
        let unknown = Uuid::new_v4();

        let err = assert_err!(
            rbac.permissions()
                .create_permissions(unknown, &[PermissionFactory::admin("articles")], &cancel)
                .await
        );
        assert!(err.is_store_failure());

        let stored = rbac
            .permissions()
            .read_by_role_id(unknown, &cancel)
            .await
            .unwrap();
        assert!(stored.is_empty());
    }

    // ==================== Lookups ====================

    #[tokio::test]
    async fn test_read_by_role_id_without_permissions() {
        let db = TestDatabase::new().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();
        let role = rbac.roles().create("empty", "", &cancel).await.unwrap();

        let stored = assert_ok!(rbac.permissions().read_by_role_id(role, &cancel).await);
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_read_by_role_name_and_resource() {
        let (db, roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();

        let permission = assert_ok!(
            rbac.permissions()
                .read_by_role_name_and_resource("admin", "articles", &cancel)
                .await
        );
        assert_eq!(permission.role_id, roles.admin);
        permission.assert_flags(ALL_ENABLED);

        let err = assert_err!(
            rbac.permissions()
                .read_by_role_name_and_resource("admin", "billing", &cancel)
                .await
        );
        assert!(matches!(err, RbacError::NotFound(_)));

        let err = assert_err!(
            rbac.permissions()
                .read_by_role_name_and_resource("ghost", "articles", &cancel)
                .await
        );
        assert!(err.is_missing());
    }

    #[tokio::test]
    async fn test_lookup_by_role_names() {
        let (db, _roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();

        let names = vec!["admin".to_string(), "user".to_string()];
        let permissions = assert_ok!(
            rbac.permissions()
                .get_permissions_by_resource_name_and_role_names("articles", &names, &cancel)
                .await
        );
        assert_eq!(permissions.len(), 2);

        let only_user = vec!["user".to_string(), "ghost".to_string()];
        let permissions = rbac
            .permissions()
            .get_permissions_by_resource_name_and_role_names("articles", &only_user, &cancel)
            .await
            .unwrap();
        assert_eq!(permissions.len(), 1);
        permissions[0].assert_flags(ALL_DISABLED);
    }

    #[tokio::test]
    async fn test_lookup_by_role_ids() {
        let (db, roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();

        let permissions = assert_ok!(
            rbac.permissions()
                .get_permissions_by_resource_name_and_role_ids(
                    "articles",
                    &[roles.admin, roles.user],
                    &cancel,
                )
                .await
        );
        assert_eq!(permissions.len(), 2);

        let permissions = rbac
            .permissions()
            .get_permissions_by_resource_name_and_role_ids("articles", &[roles.admin], &cancel)
            .await
            .unwrap();
        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].role_id, roles.admin);
    }

    #[tokio::test]
    async fn test_multi_role_lookups_reject_empty_sets() {
        let (db, _roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();

        let err = assert_err!(
            rbac.permissions()
                .get_permissions_by_resource_name_and_role_names("articles", &[], &cancel)
                .await
        );
        assert!(matches!(err, RbacError::EmptyInput(_)));

        let err = assert_err!(
            rbac.permissions()
                .get_permissions_by_resource_name_and_role_ids("articles", &[], &cancel)
                .await
        );
        assert!(matches!(err, RbacError::EmptyInput(_)));
    }

    #[tokio::test]
    async fn test_multi_role_lookups_with_no_rows() {
        let (db, _roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();

        let err = assert_err!(
            rbac.permissions()
                .get_permissions_by_resource_name_and_role_names(
                    "billing",
                    &["admin".to_string()],
                    &cancel,
                )
                .await
        );
        assert!(matches!(err, RbacError::NoResultFound(_)));

        let err = assert_err!(
            rbac.permissions()
                .get_permissions_by_resource_name_and_role_ids("articles", &[Uuid::new_v4()], &cancel)
                .await
        );
        assert!(matches!(err, RbacError::NoResultFound(_)));
        assert!(err.is_missing());
    }

    #[tokio::test]
    async fn test_cancelled_lookup() {
        let (db, roles) = TestDatabase::seeded().await;
        let rbac = db.system();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = assert_err!(rbac.permissions().read_by_role_id(roles.admin, &cancel).await);
        assert!(matches!(err, RbacError::Cancelled(_)));

        let err = assert_err!(
            rbac.permissions()
                .create_permissions(roles.admin, &[PermissionFactory::denied("articles")], &cancel)
                .await
        );
        assert!(matches!(err, RbacError::Cancelled(_)));

        // Nothing was replaced
        let stored = rbac
            .permissions()
            .read_by_role_id(roles.admin, &CancellationToken::new())
            .await
            .unwrap();
        stored[0].assert_flags(ALL_ENABLED);
    }
}
