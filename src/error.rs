//! Error types for the projector scoped settings store.

use std::path::PathBuf;
use thiserror::Error;

/// Scope path errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("Scope path is empty")]
    Empty,

    #[error("Scope path is not absolute: {0}")]
    NotAbsolute(String),

    #[error("Scope path contains a NUL byte: {0:?}")]
    NulByte(String),

    #[error("Scope path is not valid UTF-8: {0:?}")]
    NotUtf8(PathBuf),
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed store data in {path:?}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Top-level errors surfaced to the caller of a session
#[derive(Debug, Error)]
pub enum ProjectorError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid location: {0}")]
    InvalidScope(#[from] ScopeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ProjectorError {
    fn from(err: config::ConfigError) -> Self {
        ProjectorError::ConfigError(err.to_string())
    }
}
