//! Repository traits for product operations.

pub mod products;

pub use products::ProductRepo;
