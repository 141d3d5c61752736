//! In-memory product store.
//!
//! Used for tests and throwaway deployments. Ids are handed out from a
//! monotonically increasing counter and never reused.

use crate::error::StoreResult;
use crate::models::{NewProductRow, ProductRow};
use crate::repos::ProductRepo;
use crate::store::ProductStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    rows: BTreeMap<i64, ProductRow>,
}

/// Product store backed by a process-local map.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Create an empty store. The first product receives id 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Whether the store holds no products.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn migrate(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl ProductRepo for MemoryStore {
    async fn get_product(&self, id: i64) -> StoreResult<Option<ProductRow>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn insert_product(&self, product: &NewProductRow) -> StoreResult<ProductRow> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let row = ProductRow {
            id,
            name: product.name.clone(),
            quantity: product.quantity,
            version: product.initial_version(),
        };
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update_product(&self, product: &ProductRow) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&product.id) {
            Some(row) => {
                row.name.clone_from(&product.name);
                row.quantity = product.quantity;
                row.version = product.version;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_product(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }
}
