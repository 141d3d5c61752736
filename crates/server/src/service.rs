//! Product service façade over the store.

use stockpile_store::{NewProductRow, ProductRepo, ProductRow, ProductStore, StoreResult};
use std::sync::Arc;

/// Business-logic seam between the HTTP protocol and storage.
///
/// Every operation forwards to the store unchanged.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Get a product by ID, or `None` if it does not exist.
    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<ProductRow>> {
        self.store.get_product(id).await
    }

    /// Get all products.
    pub async fn find_all(&self) -> StoreResult<Vec<ProductRow>> {
        self.store.list_products().await
    }

    /// Persist a new product.
    pub async fn save(&self, product: &NewProductRow) -> StoreResult<ProductRow> {
        self.store.insert_product(product).await
    }

    /// Overwrite an existing product. False if the row is gone.
    pub async fn update(&self, product: &ProductRow) -> StoreResult<bool> {
        self.store.update_product(product).await
    }

    /// Delete a product. False if the row is gone.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        self.store.delete_product(id).await
    }

    /// Check store connectivity.
    pub async fn health_check(&self) -> StoreResult<()> {
        self.store.health_check().await
    }
}
