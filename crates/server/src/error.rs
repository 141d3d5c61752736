//! API error types.
//!
//! Failures reach the client as a bare status code. The diagnostic text is
//! only written to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stockpile_core::IfMatch;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("version conflict: expected {expected}, current version is {current}")]
    VersionConflict { expected: IfMatch, current: i32 },

    #[error("precondition required: {0}")]
    PreconditionRequired(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("store error: {0}")]
    Store(#[from] stockpile_store::StoreError),

    #[error("core error: {0}")]
    Core(#[from] stockpile_core::Error),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::BadRequest(_) => "bad_request",
            Self::VersionConflict { .. } => "version_conflict",
            Self::PreconditionRequired(_) => "precondition_required",
            Self::Internal(_) => "internal_error",
            Self::Store(_) => "store_error",
            Self::Core(stockpile_core::Error::InvalidLocation(_)) => "location_error",
            Self::Core(_) => "core_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::VersionConflict { .. } => StatusCode::CONFLICT,
            Self::PreconditionRequired(_) => StatusCode::PRECONDITION_REQUIRED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Core(e) => match e {
                stockpile_core::Error::InvalidProduct(_)
                | stockpile_core::Error::InvalidPrecondition(_) => StatusCode::BAD_REQUEST,
                stockpile_core::Error::InvalidLocation(_)
                | stockpile_core::Error::VersionOverflow(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        } else {
            tracing::debug!(code = self.code(), error = %self, "Request rejected");
        }
        status.into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
