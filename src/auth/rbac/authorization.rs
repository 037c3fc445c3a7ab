//! Authorization predicates over a loaded permission list
//!
//! Permissions are OR-ed: one explicit grant for the action is enough.
//! Unset flags count as not granted. The cancellation token is polled
//! before each element.

use tokio_util::sync::CancellationToken;

use super::types::{Action, Decision, Permission};

/// Evaluate `action` against `permissions`
pub fn evaluate(
    permissions: &[Permission],
    action: Action,
    cancel: &CancellationToken,
) -> Decision {
    for permission in permissions {
        if cancel.is_cancelled() {
            return Decision::Cancelled;
        }
        if permission.flag(action).is_enabled() {
            return Decision::Allowed;
        }
    }
    Decision::Denied
}

pub fn can_read(permissions: &[Permission], cancel: &CancellationToken) -> bool {
    evaluate(permissions, Action::Read, cancel).is_allowed()
}

pub fn can_create(permissions: &[Permission], cancel: &CancellationToken) -> bool {
    evaluate(permissions, Action::Create, cancel).is_allowed()
}

pub fn can_update(permissions: &[Permission], cancel: &CancellationToken) -> bool {
    evaluate(permissions, Action::Update, cancel).is_allowed()
}

pub fn can_delete(permissions: &[Permission], cancel: &CancellationToken) -> bool {
    evaluate(permissions, Action::Delete, cancel).is_allowed()
}
