//! Product repository trait.

use crate::error::StoreResult;
use crate::models::{NewProductRow, ProductRow};
use async_trait::async_trait;

/// Repository for product records.
///
/// Absence is a normal outcome: `get_product` returns `None` and the write
/// operations return `false` when no row matched. Errors are reserved for
/// storage failures.
#[async_trait]
pub trait ProductRepo: Send + Sync {
    /// Get a product by ID.
    async fn get_product(&self, id: i64) -> StoreResult<Option<ProductRow>>;

    /// List all products. Order is not guaranteed.
    async fn list_products(&self) -> StoreResult<Vec<ProductRow>>;

    /// Insert a product, assigning a fresh ID.
    /// Returns the persisted record.
    async fn insert_product(&self, product: &NewProductRow) -> StoreResult<ProductRow>;

    /// Overwrite name, quantity and version of the row with `product.id`.
    ///
    /// The stored version is not compared: this only checks that the row
    /// exists. Returns true iff exactly one row was modified.
    async fn update_product(&self, product: &ProductRow) -> StoreResult<bool>;

    /// Delete a product by ID.
    /// Returns true iff exactly one row was removed.
    async fn delete_product(&self, id: i64) -> StoreResult<bool>;
}
