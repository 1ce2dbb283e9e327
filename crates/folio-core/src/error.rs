//! Error types for folio-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and publishing Folio collections.
///
/// Nothing in this enum is fatal to a whole run on its own; callers decide
/// whether a failure skips one document or aborts the command.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem failure tied to a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A collection folder or document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A header block could not be decoded as structured data.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Remote listing or document fetch failed.
    #[error("HTTP error: {message}")]
    Http {
        /// What was being fetched and why it failed
        message: String,
        /// HTTP status, when a response was received
        status: Option<u16>,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other failed operation
    #[error("Operation failed: {0}")]
    Operation(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a not-found error.
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Error::NotFound(what.into())
    }

    /// Creates a header decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Error::Decode(message.into())
    }

    /// Creates an HTTP error without a status (connection failures, timeouts).
    pub fn http<S: Into<String>>(message: S) -> Self {
        Error::Http {
            message: message.into(),
            status: None,
        }
    }

    /// Creates an HTTP error for a non-success response.
    pub fn http_status<S: Into<String>>(message: S, status: u16) -> Self {
        Error::Http {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates a generic operation error.
    pub fn operation<S: Into<String>>(message: S) -> Self {
        Error::Operation(message.into())
    }

    /// Returns `true` for errors that mean "the thing is not there" rather
    /// than "the thing is broken".
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Error::Http { status, .. } => *status == Some(404),
            _ => false,
        }
    }
}
