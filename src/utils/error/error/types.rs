//! Error types for the RBAC store

use thiserror::Error;

/// Result type alias for the RBAC store
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the RBAC store
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors, raised while assembling the store
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Redis errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// A direct-key lookup found no row
    #[error("Not found: {0}")]
    NotFound(String),

    /// A targeted update or delete matched no row
    #[error("No rows affected: {0}")]
    NoRowsAffected(String),

    /// The caller supplied an empty list or set
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A multi-role lookup produced no rows
    #[error("No result found: {0}")]
    NoResultFound(String),

    /// The cancellation token fired before the operation finished
    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}
