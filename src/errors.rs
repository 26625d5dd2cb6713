//! Error types for skillbook
//!
//! `LoadError` is the only failure the document store can produce; everything
//! above the store wraps it in `GuideError`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse guidance document content
#[derive(Error, Debug)]
pub enum LoadError {
    /// Backing content does not exist
    #[error("Document source not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    /// Backing content exists but could not be read
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content was read but is not a valid guidance document
    #[error("Malformed document {origin}: {reason}")]
    Malformed { origin: String, reason: String },

    /// Two documents claim the same topic identifier
    #[error("Duplicate topic '{topic}' defined by {first} and {second}")]
    DuplicateTopic {
        topic: String,
        first: String,
        second: String,
    },
}

impl LoadError {
    pub(crate) fn malformed(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for skillbook
#[derive(Error, Debug)]
pub enum GuideError {
    /// Document store failed to load
    #[error("Failed to load guidance documents")]
    Load(#[from] LoadError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested topic is not in the store
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for skillbook operations
pub type Result<T> = std::result::Result<T, GuideError>;
