//! Unified error type for the user store.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Bazaar user store.
///
/// Variants fall into three classes: input validation, storage failures
/// (`Conflict` and `Database`), and data-integrity faults. Only the last one
/// signals corrupted data and must never be collapsed into a sentinel.
#[derive(Error, Debug)]
pub enum BazaarError {
    // ============ Input Errors ============
    /// Input failed validation before any query was issued
    #[error("Validation error: {0}")]
    Validation(String),

    /// No row matched the statement
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ============ Storage Errors ============
    /// Unique or other constraint violation reported by the store
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Connectivity, statement, or generated-key failure
    #[error("Database error: {0}")]
    Database(String),

    // ============ Integrity Errors ============
    /// A stored value could not be mapped onto the domain model
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BazaarError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::DataIntegrity(_) => "DATA_INTEGRITY_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a data-integrity error.
    #[must_use]
    pub fn data_integrity<T: Into<String>>(message: T) -> Self {
        Self::DataIntegrity(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error originated in the storage layer.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Conflict(_) | Self::Database(_))
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for BazaarError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    return Self::Conflict(db_err.message().to_string());
                }
                Self::Database(err.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::DataIntegrity(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for BazaarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(BazaarError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(BazaarError::validation("bad id").error_code(), "VALIDATION_ERROR");
        assert_eq!(BazaarError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(BazaarError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(
            BazaarError::data_integrity("role").error_code(),
            "DATA_INTEGRITY_ERROR"
        );
        assert_eq!(BazaarError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_storage_classification() {
        assert!(BazaarError::conflict("dup").is_storage());
        assert!(BazaarError::Database("gone".to_string()).is_storage());
        assert!(!BazaarError::not_found("User", 1).is_storage());
        assert!(!BazaarError::validation("negative id").is_storage());
        assert!(!BazaarError::data_integrity("role").is_storage());
    }

    #[test]
    fn test_retriable_errors() {
        assert!(BazaarError::Database("connection lost".to_string()).is_retriable());
        assert!(!BazaarError::conflict("dup").is_retriable());
        assert!(!BazaarError::data_integrity("role").is_retriable());
    }

    #[test]
    fn test_error_display() {
        let not_found = BazaarError::not_found("User", "123");
        assert!(not_found.to_string().contains("User"));
        assert!(not_found.to_string().contains("123"));

        let integrity = BazaarError::data_integrity("unknown role 'seller'");
        assert!(integrity.to_string().contains("unknown role"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_from_sqlx_row_not_found_is_database() {
        let err: BazaarError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, BazaarError::Database(_)));
    }
}
