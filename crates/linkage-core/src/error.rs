//! Error types for the linkage core library
//!
//! This module defines the error handling system for the document engine,
//! using thiserror for ergonomic error definitions and anyhow for flexible
//! error sources.

use thiserror::Error;

/// Main error type for document mapping operations
#[derive(Error, Debug)]
pub enum Error {
    /// The type descriptor could not be turned into a classification
    #[error("Classification failed for '{type_name}': {message}")]
    Classification {
        type_name: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A declared value kind has no defined coercion or linkage handling
    #[error("Unsupported type on field '{field}': {message}")]
    UnsupportedType { field: String, message: String },

    /// A blank instance of a type could not be produced
    #[error("Instantiation failed for '{type_name}': {message}")]
    Instantiation {
        type_name: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The document shape does not match expectations
    #[error("Hydration failed: {message}")]
    Hydration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON value conversion errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Severity levels attached to recovered per-field issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    /// Informational, no action required
    Info,
    /// Warning, should be reviewed
    Warning,
    /// Error, the field was dropped
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
