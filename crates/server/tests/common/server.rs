//! Server test utilities.

use stockpile_core::config::{AppConfig, StoreConfig};
use stockpile_server::{AppState, create_router};
use stockpile_store::{MemoryStore, ProductStore, SqliteStore};
use std::sync::Arc;
use tempfile::TempDir;

/// A test server wrapper with all dependencies.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    pub store: Arc<dyn ProductStore>,
    _temp_dir: Option<TempDir>,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a test server over an in-memory store.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test server over an in-memory store with custom config modifications.
    pub async fn with_config<F>(modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let store: Arc<dyn ProductStore> = Arc::new(MemoryStore::new());
        let mut config = AppConfig::for_testing();
        modifier(&mut config);
        Self::build(config, store, None)
    }

    /// Create a test server over a SQLite file in a temporary directory.
    pub async fn sqlite() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("stockpile.db");
        let store: Arc<dyn ProductStore> = Arc::new(
            SqliteStore::new(&db_path)
                .await
                .expect("Failed to create SQLite store"),
        );

        let config = AppConfig {
            store: StoreConfig::Sqlite { path: db_path },
            ..AppConfig::for_testing()
        };
        Self::build(config, store, Some(temp_dir))
    }

    /// Create a test server over an arbitrary store (e.g. a mock).
    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self::build(AppConfig::for_testing(), store, None)
    }

    fn build(config: AppConfig, store: Arc<dyn ProductStore>, temp_dir: Option<TempDir>) -> Self {
        let state = AppState::new(config, store.clone());
        let router = create_router(state.clone());

        Self {
            router,
            state,
            store,
            _temp_dir: temp_dir,
        }
    }
}
