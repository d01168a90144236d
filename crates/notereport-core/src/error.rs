//! Error types and exit codes for notereport
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing database, unknown entity, broken ownership chain)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing database, unknown entity (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for NoteReportError {
    fn from(err: rusqlite::Error) -> Self {
        NoteReportError::Database(err.to_string())
    }
}

/// Errors that can occur while building or rendering a notes report
#[derive(Error, Debug)]
pub enum NoteReportError {
    // Usage errors (exit code 2)
    #[error("unknown report scope: {0}")]
    UnknownScope(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("database not found: {path:?} (run `notereport init` first)")]
    DatabaseNotFound { path: PathBuf },

    #[error("{kind} not found: {num}")]
    EntityNotFound { kind: String, num: i64 },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("note {num} has more than one parent ({kinds})")]
    AmbiguousParent { num: i64, kinds: String },

    #[error("collection {num} is part of a parent cycle")]
    CollectionCycle { num: i64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("database error: {0}")]
    Database(String),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl NoteReportError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        NoteReportError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NoteReportError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity row that does not exist
    pub fn entity_not_found(kind: &str, num: i64) -> Self {
        NoteReportError::EntityNotFound {
            kind: kind.to_string(),
            num,
        }
    }

    /// Create an error for anything else that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NoteReportError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NoteReportError::UnknownScope(_)
            | NoteReportError::UsageError(_)
            | NoteReportError::InvalidValue { .. } => ExitCode::Usage,

            NoteReportError::DatabaseNotFound { .. }
            | NoteReportError::EntityNotFound { .. }
            | NoteReportError::NotFound { .. }
            | NoteReportError::AmbiguousParent { .. }
            | NoteReportError::CollectionCycle { .. } => ExitCode::Data,

            NoteReportError::Io(_)
            | NoteReportError::Yaml(_)
            | NoteReportError::Json(_)
            | NoteReportError::Toml(_)
            | NoteReportError::Database(_)
            | NoteReportError::FailedOperation { .. }
            | NoteReportError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NoteReportError::UnknownScope(_) => "unknown_scope",
            NoteReportError::UsageError(_) => "usage_error",
            NoteReportError::InvalidValue { .. } => "invalid_value",
            NoteReportError::DatabaseNotFound { .. } => "database_not_found",
            NoteReportError::EntityNotFound { .. } => "entity_not_found",
            NoteReportError::NotFound { .. } => "not_found",
            NoteReportError::AmbiguousParent { .. } => "ambiguous_parent",
            NoteReportError::CollectionCycle { .. } => "collection_cycle",
            NoteReportError::Io(_) => "io_error",
            NoteReportError::Yaml(_) => "yaml_error",
            NoteReportError::Json(_) => "json_error",
            NoteReportError::Toml(_) => "toml_error",
            NoteReportError::Database(_) => "database_error",
            NoteReportError::FailedOperation { .. } => "failed_operation",
            NoteReportError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for notereport operations
pub type Result<T> = std::result::Result<T, NoteReportError>;
