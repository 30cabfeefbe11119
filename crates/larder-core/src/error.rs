//! Error types for the store library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database connection could not be established
    #[error("Failed to open database at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// A bootstrap schema statement failed; nothing was persisted
    #[error("Bootstrap schema failed on statement `{statement}`: {source}")]
    Bootstrap {
        statement: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A migration step failed; every step applied during the same open was
    /// rolled back
    #[error("Migration from v{from} to v{to} failed on statement `{statement}`: {source}")]
    MigrationStep {
        from: u32,
        to: u32,
        statement: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Database query or bookkeeping errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The store handle was closed before the operation was issued
    #[error("Store is not open")]
    NotOpen,
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
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
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
    pub fn with_source(self, source: rusqlite::Error) -> StoreError {
        StoreError::Database {
            message: self.message,
            source,
        }
    }
}

impl StoreError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a failed blocking task.
    pub(crate) fn join(error: &tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }

    /// Whether this error aborted schema initialization.
    pub fn is_initialization_failure(&self) -> bool {
        matches!(
            self,
            Self::Open { .. } | Self::Bootstrap { .. } | Self::MigrationStep { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StoreError::database(message).with_source(e))
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to read item").unwrap_err();

        assert!(matches!(
            err,
            StoreError::Database { ref message, .. } if message == "Failed to read item"
        ));
        assert!(err.to_string().contains("Failed to read item"));
        assert!(!err.is_initialization_failure());
    }

    #[test]
    fn test_migration_step_message() {
        let err = StoreError::MigrationStep {
            from: 0,
            to: 1,
            statement: "ALTER TABLE nope".to_string(),
            source: rusqlite::Error::InvalidQuery,
        };

        let message = err.to_string();
        assert!(message.contains("v0 to v1"));
        assert!(message.contains("ALTER TABLE nope"));
        assert!(err.is_initialization_failure());
    }
}
