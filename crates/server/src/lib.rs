//! HTTP API server for stockpile.
//!
//! This crate provides the product HTTP surface:
//! - Product reads, listing and creation
//! - Conditional updates guarded by `If-Match` / ETag versions
//! - Deletes, optionally guarded by `If-Match`
//! - Health check

pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use service::ProductService;
pub use state::AppState;
