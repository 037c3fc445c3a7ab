//! RBAC behaviour configuration

use serde::{Deserialize, Serialize};

/// RBAC behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RbacConfig {
    /// Fail `create_permissions` with `NoRowsAffected` when the role had no
    /// permission rows to replace
    #[serde(default)]
    pub require_existing_permissions: bool,
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.require_existing_permissions {
            self.require_existing_permissions = true;
        }
        self
    }
}
