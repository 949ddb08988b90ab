//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for geoscore operations
#[derive(Debug, Error)]
pub enum Error {
    /// The ingested log does not have the expected shape, or is not JSON at all.
    ///
    /// A format error rejects the whole operation; nothing downstream is
    /// touched.
    #[error("Invalid format: {message}")]
    Format { message: String },

    /// File system related errors
    #[error("File system error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a file system error with path context
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Whether this error is a rejected log rather than an environment failure
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::format(err.to_string())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
