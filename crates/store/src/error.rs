//! Product store error types.
//!
//! A missing product is not an error: lookups return `None` and writes
//! report whether a row was touched.

use thiserror::Error;

/// Product store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for product store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
