use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::rbac::{NewPermission, Permission as DomainPermission};

/// Permission database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    /// Permission ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Role this permission belongs to
    pub role_id: Uuid,

    /// Protected resource name
    pub resource: String,

    // Nullable: NULL is kept distinct from false
    pub is_create: Option<bool>,
    pub is_read: Option<bool>,
    pub is_update: Option<bool>,
    pub is_delete: Option<bool>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,

    /// Soft-delete timestamp
    pub deleted_at: Option<DateTimeWithTimeZone>,

    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

/// Permission entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to role relation
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_delete = "Cascade"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain permission
    pub fn to_domain_permission(&self) -> DomainPermission {
        DomainPermission {
            id: self.id,
            role_id: self.role_id,
            resource: self.resource.clone(),
            is_create: self.is_create.into(),
            is_read: self.is_read.into(),
            is_update: self.is_update.into(),
            is_delete: self.is_delete.into(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
            deleted_at: self.deleted_at.map(|dt| dt.naive_utc().and_utc()),
            created_by: self.created_by.clone(),
            updated_by: self.updated_by.clone(),
            deleted_by: self.deleted_by.clone(),
        }
    }

    /// Build the active model inserted for `permission` under `role_id`
    pub fn from_new_permission(role_id: Uuid, permission: &NewPermission) -> ActiveModel {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            role_id: Set(role_id),
            resource: Set(permission.resource.clone()),
            is_create: Set(permission.is_create.into()),
            is_read: Set(permission.is_read.into()),
            is_update: Set(permission.is_update.into()),
            is_delete: Set(permission.is_delete.into()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            created_by: Set(permission.created_by.clone()),
            updated_by: Set(None),
            deleted_by: Set(None),
        }
    }
}
