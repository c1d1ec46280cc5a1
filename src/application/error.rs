//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Application errors cover everything outside the core data structure:
/// reading network files, validating their contents and loading settings.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid network file {path}: {message}")]
    NetworkFile { path: PathBuf, message: String },

    #[error("ring defined more than once: {0}")]
    DuplicateRing(String),

    #[error("invalid {kind} name: {name:?}")]
    InvalidName { kind: &'static str, name: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
