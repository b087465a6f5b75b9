//! Error types for inscribe-core

use thiserror::Error;

/// Result type alias using inscribe-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in note store operations
#[derive(Error, Debug)]
pub enum Error {
    /// Blank identifier or text where a value is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Document identifier collapsed to nothing under sanitization
    #[error("Invalid document identifier: {0}")]
    InvalidDocumentId(String),

    /// Export requested before any note document exists
    #[error("Note document not found: {0}")]
    NotFound(String),

    /// Export requested against a document with no real content yet
    #[error("Note document has no content beyond its title: {0}")]
    EmptyDocument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// External rendering capability failed
    #[error("Render error: {0}")]
    Render(String),
}
