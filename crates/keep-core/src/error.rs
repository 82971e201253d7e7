//! Error types for keep-core

use thiserror::Error;

/// Result type alias using keep-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keep-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
