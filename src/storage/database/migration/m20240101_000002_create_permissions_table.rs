use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Permissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Permissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Permissions::RoleId).uuid().not_null())
                    .col(
                        ColumnDef::new(Permissions::Resource)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Permissions::IsCreate)
                            .boolean()
                            .null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Permissions::IsRead)
                            .boolean()
                            .null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Permissions::IsUpdate)
                            .boolean()
                            .null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Permissions::IsDelete)
                            .boolean()
                            .null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Permissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Permissions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Permissions::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Permissions::CreatedBy).string().null())
                    .col(ColumnDef::new(Permissions::UpdatedBy).string().null())
                    .col(ColumnDef::new(Permissions::DeletedBy).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permissions_role_id")
                            .from(Permissions::Table, Permissions::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_permissions_role_id")
                    .table(Permissions::Table)
                    .col(Permissions::RoleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_permissions_resource")
                    .table(Permissions::Table)
                    .col(Permissions::Resource)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Permissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Permissions {
    Table,
    Id,
    RoleId,
    Resource,
    IsCreate,
    IsRead,
    IsUpdate,
    IsDelete,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    CreatedBy,
    UpdatedBy,
    DeletedBy,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
}
