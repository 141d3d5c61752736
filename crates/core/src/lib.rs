//! Core domain rules for the stockpile product service.
//!
//! This crate defines what every other crate agrees on:
//! - Product versions, ETags and `If-Match` preconditions
//! - Canonical resource locations
//! - Product field validation
//! - Configuration types

pub mod config;
pub mod error;
pub mod product;

pub use error::{Error, Result};
pub use product::{
    IfMatch, INITIAL_VERSION, MAX_NAME_LEN, etag, next_version, product_location, validate_name,
    validate_quantity,
};
