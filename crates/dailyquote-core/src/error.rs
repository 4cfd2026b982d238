//! Error types for dailyquote-core

use thiserror::Error;

/// Result type alias using dailyquote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dailyquote-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Key-value store error
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Quote not found
    #[error("Quote not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Share capability error
    #[error("Share error: {0}")]
    Share(String),
}
