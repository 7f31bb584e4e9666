//! PostgreSQL-backed record store.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use super::{RecordStore, StoreResult};
use crate::models::Person;

/// Reads person records from the `people` table.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Opens a pool against `database_url` and verifies the connection.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.ping().await?;
        info!("Connected to PostgreSQL");
        Ok(store)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn fetch(&self, id: i64) -> StoreResult<Option<Person>> {
        // Columns are cast so INTEGER/VARCHAR schemas decode the same way
        let row = sqlx::query_as::<_, (i64, String)>(
            "SELECT id::BIGINT, name::TEXT FROM people WHERE id = $1 LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, name)| Person { id, name }))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
