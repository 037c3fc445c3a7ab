//! Utility modules for the RBAC store
//!
//! - **error**: The crate error type and result alias
//! - **logging**: Subscriber installation for `tracing`

pub mod error; // Error handling
pub mod logging; // Logging setup

pub use error::{RbacError, Result};
pub use logging::init_logger;
