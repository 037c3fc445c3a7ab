//! Logging setup
//!
//! The crate itself only emits `tracing` events; embedding services and the test
//! suite call [`init_logger`] to install a subscriber.

use crate::config::LoggingConfig;
use crate::utils::error::{RbacError, Result};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `Ok(false)` when a
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_logger(config: &LoggingConfig) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| RbacError::Config(format!("Invalid log level: {}", e)))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    Ok(installed)
}
