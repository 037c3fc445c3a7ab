//! RBAC type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Tri-state permission flag.
///
/// Stored as a nullable boolean and serialized as `true`, `false` or `null`.
/// Only the authorization predicates collapse [`Flag::Unset`] to "not granted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Flag {
    /// Explicitly granted
    Enabled,
    /// Explicitly withheld
    Disabled,
    /// Never set
    #[default]
    Unset,
}

impl Flag {
    /// True only for an explicit grant
    pub fn is_enabled(self) -> bool {
        self == Flag::Enabled
    }

    /// Whether the flag carries an explicit value
    pub fn is_set(self) -> bool {
        self != Flag::Unset
    }
}

impl From<Option<bool>> for Flag {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Flag::Enabled,
            Some(false) => Flag::Disabled,
            None => Flag::Unset,
        }
    }
}

impl From<Flag> for Option<bool> {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::Enabled => Some(true),
            Flag::Disabled => Some(false),
            Flag::Unset => None,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

/// The four actions a permission row can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    /// All actions in column order
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Role record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role ID
    pub id: Uuid,
    /// Role name
    pub name: String,
    /// Role description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

impl Role {
    /// Whether the role was soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Permission record: the flags one role holds on one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Permission ID
    pub id: Uuid,
    /// Owning role
    pub role_id: Uuid,
    /// Protected resource name
    #[serde(rename = "resource_name")]
    pub resource: String,
    #[serde(default)]
    pub is_create: Flag,
    #[serde(default)]
    pub is_read: Flag,
    #[serde(default)]
    pub is_update: Flag,
    #[serde(default)]
    pub is_delete: Flag,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

impl Permission {
    /// The flag stored for `action`
    pub fn flag(&self, action: Action) -> Flag {
        match action {
            Action::Create => self.is_create,
            Action::Read => self.is_read,
            Action::Update => self.is_update,
            Action::Delete => self.is_delete,
        }
    }
}

/// Insert payload for [`PermissionRepository::create_permissions`](super::PermissionRepository::create_permissions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPermission {
    /// Protected resource name
    pub resource: String,
    pub is_create: Flag,
    pub is_read: Flag,
    pub is_update: Flag,
    pub is_delete: Flag,
    /// Actor recorded in `created_by`
    pub created_by: Option<String>,
}

impl NewPermission {
    /// A permission on `resource` with every flag unset
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            is_create: Flag::Unset,
            is_read: Flag::Unset,
            is_update: Flag::Unset,
            is_delete: Flag::Unset,
            created_by: None,
        }
    }

    /// A permission on `resource` with every flag explicitly set to `value`
    pub fn with_all(resource: impl Into<String>, value: bool) -> Self {
        let flag = Flag::from(value);
        Self {
            is_create: flag,
            is_read: flag,
            is_update: flag,
            is_delete: flag,
            ..Self::new(resource)
        }
    }

    /// Set a single flag
    pub fn set(mut self, action: Action, flag: impl Into<Flag>) -> Self {
        let flag = flag.into();
        match action {
            Action::Create => self.is_create = flag,
            Action::Read => self.is_read = flag,
            Action::Update => self.is_update = flag,
            Action::Delete => self.is_delete = flag,
        }
        self
    }

    /// Record the creating actor
    pub fn created_by(mut self, actor: impl Into<String>) -> Self {
        self.created_by = Some(actor.into());
        self
    }
}

/// Outcome of evaluating a permission list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Some permission explicitly grants the action
    Allowed,
    /// The list was exhausted without a grant
    Denied,
    /// The cancellation token fired before a grant was found
    Cancelled,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        self == Decision::Allowed
    }
}
