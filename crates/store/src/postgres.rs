//! PostgreSQL-based product store implementation.

use crate::error::StoreResult;
use crate::models::{NewProductRow, ProductRow};
use crate::repos::ProductRepo;
use crate::store::ProductStore;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::str::FromStr;

/// PostgreSQL schema (embedded).
const POSTGRES_SCHEMA: &str = include_str!("postgres_schema.sql");

fn postgres_schema_statements(schema: &str) -> Vec<&str> {
    schema
        .split(';')
        .filter_map(|statement| {
            let trimmed = statement.trim();
            if trimmed.is_empty() {
                return None;
            }
            let has_sql = trimmed.lines().any(|line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with("--")
            });
            has_sql.then_some(trimmed)
        })
        .collect()
}

/// PostgreSQL-based product store.
pub struct PostgresStore {
    pool: Pool<Postgres>,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from a connection URL.
    pub async fn new(
        url: &str,
        max_connections: u32,
        statement_timeout_ms: Option<u64>,
    ) -> StoreResult<Self> {
        let mut opts = PgConnectOptions::from_str(url)?;

        if let Some(timeout_ms) = statement_timeout_ms {
            opts = opts.options([("statement_timeout", format!("{}ms", timeout_ms))]);
            tracing::info!("PostgreSQL statement_timeout set to {}ms", timeout_ms);
        }

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PostgresStore {
    async fn migrate(&self) -> StoreResult<()> {
        // Prepared statements cannot hold more than one command.
        for statement in postgres_schema_statements(POSTGRES_SCHEMA) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepo for PostgresStore {
    async fn get_product(&self, id: i64) -> StoreResult<Option<ProductRow>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, quantity, version FROM products WHERE id = $1",
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
            VALUES ($1, $2, $3)
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
        let result = sqlx::query(
            "UPDATE products SET name = $1, quantity = $2, version = $3 WHERE id = $4",
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.version)
        .bind(product.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete_product(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
