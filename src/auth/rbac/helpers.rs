//! Helpers shared by the RBAC repositories

use crate::utils::error::{RbacError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Race a store or cache call against the caller's cancellation token
pub(super) async fn run_cancellable<T, F>(
    cancel: &CancellationToken,
    operation: &str,
    future: F,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(RbacError::cancelled(format!("{} cancelled", operation))),
        result = future => result,
    }
}
