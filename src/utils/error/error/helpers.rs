//! Helper functions for creating specific error types

use super::types::RbacError;

/// Helper functions for creating specific errors
impl RbacError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn no_rows_affected<S: Into<String>>(message: S) -> Self {
        Self::NoRowsAffected(message.into())
    }

    pub fn empty_input<S: Into<String>>(message: S) -> Self {
        Self::EmptyInput(message.into())
    }

    pub fn no_result_found<S: Into<String>>(message: S) -> Self {
        Self::NoResultFound(message.into())
    }

    pub fn cancelled<S: Into<String>>(message: S) -> Self {
        Self::Cancelled(message.into())
    }
}

impl RbacError {
    /// Whether the error means "the targeted row does not exist"
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::NoRowsAffected(_) | Self::NoResultFound(_)
        )
    }

    /// Whether the error came from the store, the cache or (de)serialization
    pub fn is_store_failure(&self) -> bool {
        match self {
            Self::Database(_) | Self::Serialization(_) | Self::Cache(_) | Self::Io(_) => true,
            #[cfg(feature = "redis")]
            Self::Redis(_) => true,
            _ => false,
        }
    }
}
