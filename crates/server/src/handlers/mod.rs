//! HTTP request handlers.

pub mod common;
pub mod health;
pub mod products;

pub use common::*;
pub use health::*;
pub use products::*;
