//! Product store test utilities.

use stockpile_store::{PostgresStore, ProductStore, SqliteStore, StoreError, StoreResult};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tempfile::TempDir;
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;

/// Stable prefix for Docker/container startup failures in Postgres test setup.
/// Tests use this marker to decide whether to skip due to unavailable Docker.
pub const POSTGRES_CONTAINER_START_ERR_PREFIX: &str = "postgres-container-start:";

/// A SQLite test store that cleans up on drop.
#[allow(dead_code)]
pub struct TestStore {
    pub store: Arc<dyn ProductStore>,
    pub(crate) sqlite_store: Arc<SqliteStore>,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestStore {
    /// Create a new SQLite store in a temporary directory.
    pub async fn new() -> StoreResult<Self> {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let store = Arc::new(SqliteStore::new(&db_path).await?);

        Ok(Self {
            store: store.clone(),
            sqlite_store: store,
            _temp_dir: temp_dir,
        })
    }

    /// Get a reference to the product store.
    pub fn store(&self) -> Arc<dyn ProductStore> {
        self.store.clone()
    }

    /// Get a reference to the SQLite connection pool for raw queries.
    pub fn pool(&self) -> &Pool<Sqlite> {
        self.sqlite_store.pool()
    }
}

/// PostgreSQL test store wrapper that manages a testcontainer.
#[allow(dead_code)]
pub struct PostgresTestStore {
    pub store: Arc<dyn ProductStore>,
    _container: ContainerAsync<Postgres>,
}

#[allow(dead_code)]
impl PostgresTestStore {
    /// Create a new PostgreSQL test store with a testcontainer.
    pub async fn new() -> StoreResult<Self> {
        let container = Postgres::default()
            .with_tag("15-alpine")
            .start()
            .await
            .map_err(|e| {
                StoreError::Internal(format!(
                    "{} Failed to start PostgreSQL container: {e}",
                    POSTGRES_CONTAINER_START_ERR_PREFIX
                ))
            })?;

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        // Default credentials from testcontainers-modules postgres
        let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        let store = PostgresStore::new(&url, 5, None).await?;

        Ok(Self {
            store: Arc::new(store),
            _container: container,
        })
    }

    /// Get a reference to the product store.
    pub fn store(&self) -> Arc<dyn ProductStore> {
        self.store.clone()
    }
}

/// Run a test against both SQLite and PostgreSQL backends.
///
/// PostgreSQL is skipped when SKIP_POSTGRES_TESTS is set or Docker is
/// unavailable; any other setup failure panics.
#[allow(dead_code)]
pub async fn run_store_test_both<F, Fut>(test_fn: F)
where
    F: Fn(Arc<dyn ProductStore>) -> Fut + Clone,
    Fut: std::future::Future<Output = ()>,
{
    let sqlite = TestStore::new()
        .await
        .expect("Failed to create SQLite test store");
    test_fn.clone()(sqlite.store()).await;

    if std::env::var("SKIP_POSTGRES_TESTS").is_ok() {
        return;
    }
    match PostgresTestStore::new().await {
        Ok(postgres) => test_fn(postgres.store()).await,
        Err(err) => {
            let msg = err.to_string();
            if msg.contains(POSTGRES_CONTAINER_START_ERR_PREFIX) {
                eprintln!("Skipping PostgreSQL store tests (Docker unavailable): {msg}");
            } else {
                panic!("PostgreSQL test setup failed: {msg}");
            }
        }
    }
}
