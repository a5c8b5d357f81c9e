// crates/shared-kernel/src/error.rs
use std::{io, path::PathBuf};

use count_loc_core::ConfigError;
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CountLocError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CountLocError>,
    },

    #[error("File not found: '{path}'")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied: '{path}'")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Only raised when a whole file is buffered in memory.
    #[error("Out of memory: cannot buffer {requested} bytes for '{path}'")]
    OutOfMemory { path: PathBuf, requested: u64 },

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CountLocError>;

impl CountLocError {
    /// Classify an I/O failure on `path` by its [`io::ErrorKind`].
    pub fn from_io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { operation, path, source },
        }
    }

    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }

    /// Path involved in the failure, if any. Looks through context layers.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Context { source, .. } => source.path(),
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. }
            | Self::OutOfMemory { path, .. } => Some(path),
            Self::InvalidConfig { .. } => None,
        }
    }
}

impl From<ConfigError> for CountLocError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig { field: err.field(), reason: err.to_string() }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CountLocError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CountLocError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CountLocError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
