//! Error types for the taskboard library.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}: {source}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: u64 },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Resource not found for the given ID
    #[error("Resource with ID {id} not found")]
    ResourceNotFound { id: u64 },
    /// A resource with the same description already exists
    #[error("Resource already exists: {description}")]
    ResourceExists { description: String },
    /// The task already requires the resource
    #[error("Task {task_id} already requires resource {resource_id}")]
    DuplicateLink { task_id: u64, resource_id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
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
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// True for errors that mean "the referenced entity does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound { .. } | Self::TaskNotFound { .. } | Self::ResourceNotFound { .. }
        )
    }

    /// True for uniqueness conflicts reported by the storage layer.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ResourceExists { .. } | Self::DuplicateLink { .. })
    }
}

/// Returns true when SQLite rejected a write because of a UNIQUE or
/// PRIMARY KEY constraint.
pub(crate) fn is_unique_violation(error: &rusqlite::Error) -> bool {
    match error {
        rusqlite::Error::SqliteFailure(err, _) => {
            err.code == ErrorCode::ConstraintViolation
                && (err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        }
        _ => false,
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

/// Specialized extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map configuration errors with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

impl<T> ConfigResultExt<T> for std::result::Result<T, tokio::task::JoinError> {
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::Configuration {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
