//! Error types
//!
//! None of these reach the user: callers log them and carry on.

use thiserror::Error;

/// Failure of the key-value collaborator
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure while writing the two lists
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
