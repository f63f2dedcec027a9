//! Database error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid collection name: {0:?}")]
    InvalidCollection(String),

    #[error("Corrupt entry at line {line}: {message}")]
    Corrupt { line: usize, message: String },
}

