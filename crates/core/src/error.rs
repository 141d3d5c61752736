//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    #[error("invalid precondition: {0}")]
    InvalidPrecondition(String),

    #[error("invalid resource location for product id {0}")]
    InvalidLocation(i64),

    #[error("version overflow: product is at version {0}")]
    VersionOverflow(i32),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
