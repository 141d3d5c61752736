//! Product persistence for stockpile.
//!
//! This crate owns the `products` table:
//! - The [`ProductRepo`](repos::ProductRepo) repository trait
//! - SQLite, PostgreSQL and in-memory implementations
//! - Construction from configuration

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repos;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{NewProductRow, ProductRow};
pub use postgres::PostgresStore;
pub use repos::ProductRepo;
pub use store::{ProductStore, SqliteStore};

use stockpile_core::config::StoreConfig;
use std::sync::Arc;

/// Create a product store from configuration.
pub async fn from_config(config: &StoreConfig) -> StoreResult<Arc<dyn ProductStore>> {
    config.validate().map_err(StoreError::Config)?;

    match config {
        StoreConfig::Sqlite { path } => {
            let store = SqliteStore::new(path).await?;
            Ok(Arc::new(store) as Arc<dyn ProductStore>)
        }
        StoreConfig::Postgres {
            url,
            max_connections,
            statement_timeout_ms,
        } => {
            tracing::info!("Connecting to PostgreSQL using connection URL");
            let store = PostgresStore::new(url, *max_connections, *statement_timeout_ms).await?;
            Ok(Arc::new(store) as Arc<dyn ProductStore>)
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory product store; data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn ProductStore>)
        }
    }
}
