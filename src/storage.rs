//! PostgreSQL storage gateway.
//!
//! Wraps the connection pool and owns every SQL statement in the service.
//! A [`Transaction`] dropped without commit rolls back, so any early return
//! during ingestion leaves the table untouched.

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};

use crate::config::StorageConfig;
use crate::error::Result;
use crate::models::{PriceRecord, StoredPrice};

/// Upper bound on pooled connections.
const MAX_CONNECTIONS: u32 = 10;

/// Gateway over the `prices` table.
#[derive(Clone)]
pub struct Storage {
    pool: PgPool,
}

impl Storage {
    /// Open a connection pool using the given parameters.
    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&config.url())
            .await?;
        Ok(Self { pool })
    }

    /// Build a gateway over an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `prices` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS prices (
                id BIGSERIAL PRIMARY KEY,
                created_at TEXT NOT NULL,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Begin a transaction.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.pool.begin().await?)
    }

    /// Insert one record inside `tx`. The store assigns the id.
    pub async fn insert_record(
        tx: &mut Transaction<'_, Postgres>,
        record: &PriceRecord,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO prices (created_at, name, category, price) VALUES ($1, $2, $3, $4)",
        )
        .bind(&record.created_at)
        .bind(&record.name)
        .bind(&record.category)
        .bind(record.price)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Distinct category count and price sum over the whole table, read
    /// inside `tx` so the numbers include this call's uncommitted inserts.
    pub async fn global_stats(tx: &mut Transaction<'_, Postgres>) -> Result<(i64, f64)> {
        let stats: (i64, f64) = sqlx::query_as(
            "SELECT COUNT(DISTINCT category), COALESCE(SUM(price), 0)::DOUBLE PRECISION \
             FROM prices",
        )
        .fetch_one(&mut **tx)
        .await?;
        Ok(stats)
    }

    /// Every stored row, in natural storage order.
    ///
    /// Returns the raw driver error; the export pipeline maps a failure of
    /// this listing query to its own error class.
    pub async fn fetch_all(&self) -> std::result::Result<Vec<StoredPrice>, sqlx::Error> {
        sqlx::query_as("SELECT id, created_at, name, category, price FROM prices")
            .fetch_all(&self.pool)
            .await
    }
}
