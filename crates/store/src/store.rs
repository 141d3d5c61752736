//! Product store trait and the SQLite implementation.

use crate::error::StoreResult;
use crate::models::{NewProductRow, ProductRow};
use crate::repos::ProductRepo;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::Duration;

/// Combined product store trait.
#[async_trait]
pub trait ProductStore: ProductRepo + Send + Sync {
    /// Run database migrations.
    async fn migrate(&self) -> StoreResult<()>;

    /// Check database connectivity and health.
    async fn health_check(&self) -> StoreResult<()>;
}

/// SQLite-based product store.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open (creating if needed) a SQLite database and apply the schema.
    pub async fn new(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            // SQLite permits limited write concurrency; a single connection
            // serializes writers instead of surfacing lock errors.
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        tracing::debug!(path = %path.display(), "SQLite product store opened");

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for SqliteStore {
    async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepo for SqliteStore {
    async fn get_product(&self, id: i64) -> StoreResult<Option<ProductRow>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, quantity, version FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
        let rows =
            sqlx::query_as::<_, ProductRow>("SELECT id, name, quantity, version FROM products")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn insert_product(&self, product: &NewProductRow) -> StoreResult<ProductRow> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, quantity, version)
            VALUES (?, ?, ?)
            RETURNING id, name, quantity, version
            "#,
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.initial_version())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_product(&self, product: &ProductRow) -> StoreResult<bool> {
        let result =
            sqlx::query("UPDATE products SET name = ?, quantity = ?, version = ? WHERE id = ?")
                .bind(&product.name)
                .bind(product.quantity)
                .bind(product.version)
                .bind(product.id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete_product(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}

// AUTOINCREMENT keeps SQLite from handing a deleted product's id to a new row.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL CHECK (quantity >= 0),
    version INTEGER NOT NULL
);
"#;
