//! Error types for the playground server.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `From` conversions.

use std::borrow::Cow;
use thiserror::Error;

/// Top-level error type for the playground server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(Cow<'static, str>),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: Cow<'static, str>,
        message: Cow<'static, str>,
    },
}

/// Database-related errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to open database at {path}: {message}")]
    OpenFailed { path: String, message: String },

    // Carries the underlying SQLite message verbatim; the API echoes it.
    #[error("{0}")]
    ExecutionFailed(String),

    #[error("Schema introspection failed: {0}")]
    IntrospectionFailed(String),

    #[error("Seed script not found: {0}")]
    SeedScriptMissing(String),

    #[error("Seeding failed: {0}")]
    SeedFailed(String),
}

/// Why the safety gate refused a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Dangerous operations not allowed in safe mode")]
    DangerousKeyword,

    #[error("Multiple statements not allowed")]
    MultipleStatements,
}

/// Result type alias for ServerError.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Result type alias for DatabaseError.
pub type DbResult<T> = std::result::Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let db_error = DatabaseError::ExecutionFailed("no such table: users".into());
        let server_error: ServerError = db_error.into();
        assert!(matches!(server_error, ServerError::Database(_)));
    }

    #[test]
    fn test_execution_failed_message_is_verbatim() {
        let err = DatabaseError::ExecutionFailed("near \"SELEC\": syntax error".into());
        assert_eq!(err.to_string(), "near \"SELEC\": syntax error");
    }

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(
            RejectReason::DangerousKeyword.to_string(),
            "Dangerous operations not allowed in safe mode"
        );
        assert_eq!(
            RejectReason::MultipleStatements.to_string(),
            "Multiple statements not allowed"
        );
    }
}
