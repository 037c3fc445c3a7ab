use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::rbac::Role as DomainRole;

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Role ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Role name
    pub name: String,

    /// Role description
    pub description: String,

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

/// Role entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Permissions relation
    #[sea_orm(has_many = "super::permission::Entity")]
    Permissions,
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Permissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain role
    pub fn to_domain_role(&self) -> DomainRole {
        DomainRole {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
            deleted_at: self.deleted_at.map(|dt| dt.naive_utc().and_utc()),
            created_by: self.created_by.clone(),
            updated_by: self.updated_by.clone(),
            deleted_by: self.deleted_by.clone(),
        }
    }
}
