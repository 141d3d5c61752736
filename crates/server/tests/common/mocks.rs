//! Store doubles that inject races and failures.

use async_trait::async_trait;
use stockpile_store::{
    MemoryStore, NewProductRow, ProductRepo, ProductRow, ProductStore, StoreError, StoreResult,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Wraps a [`MemoryStore`] and misbehaves on demand.
///
/// Each switch is a one-shot: it fires on the next matching call and then
/// resets, so a test can stage exactly one race.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedStore {
    inner: MemoryStore,
    /// Delete the row just before the next update is applied.
    pub vanish_before_update: AtomicBool,
    /// Report the next delete as a miss without removing anything.
    pub refuse_next_delete: AtomicBool,
    /// Fail the next operation of any kind with a storage error.
    pub fail_next: AtomicBool,
    /// Number of update calls that reached the store.
    pub updates: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn check_failure(&self) -> StoreResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Internal("injected storage failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepo for ScriptedStore {
    async fn get_product(&self, id: i64) -> StoreResult<Option<ProductRow>> {
        self.check_failure()?;
        self.inner.get_product(id).await
    }

    async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
        self.check_failure()?;
        self.inner.list_products().await
    }

    async fn insert_product(&self, product: &NewProductRow) -> StoreResult<ProductRow> {
        self.check_failure()?;
        self.inner.insert_product(product).await
    }

    async fn update_product(&self, product: &ProductRow) -> StoreResult<bool> {
        self.check_failure()?;
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.vanish_before_update.swap(false, Ordering::SeqCst) {
            self.inner.delete_product(product.id).await?;
        }
        self.inner.update_product(product).await
    }

    async fn delete_product(&self, id: i64) -> StoreResult<bool> {
        self.check_failure()?;
        if self.refuse_next_delete.swap(false, Ordering::SeqCst) {
            return Ok(false);
        }
        self.inner.delete_product(id).await
    }
}

#[async_trait]
impl ProductStore for ScriptedStore {
    async fn migrate(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.check_failure()
    }
}
