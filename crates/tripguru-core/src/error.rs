//! Error types for the trip tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for store, repository and configuration failures.
///
/// Form validation problems are not errors in this sense; they live in
/// [`crate::models::FieldError`] and are carried inside the form state.
#[derive(Error, Debug)]
pub enum TripError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: u64 },
    /// A stored row holds a value the domain model cannot represent
    #[error("Trip with ID {id} has invalid data: {reason}")]
    CorruptRecord { id: u64, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A blocking database task panicked or was cancelled
    #[error("Task join error: {message}")]
    TaskJoin { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TripError {
        TripError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

impl From<tokio::task::JoinError> for TripError {
    fn from(e: tokio::task::JoinError) -> Self {
        TripError::TaskJoin {
            message: e.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::database(message).with_source(e))
    }
}

/// Result type alias for trip operations
pub type Result<T> = std::result::Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_keeps_message_and_source() {
        let err = TripError::database("Failed to insert trip")
            .with_source(rusqlite::Error::InvalidQuery);
        assert_eq!(err.to_string(), "Database error: Failed to insert trip");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = TripError::invalid_input("start").with_reason("expected dd.mm.yyyy");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'start': expected dd.mm.yyyy"
        );
    }

    #[test]
    fn test_db_context_maps_rusqlite_errors() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let mapped = result.db_context("Failed to query trip");
        assert!(matches!(mapped, Err(TripError::Database { .. })));
    }
}
