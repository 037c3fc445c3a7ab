// Module declarations
mod types;
mod connection;
mod role_ops;
mod permission_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
