//! PostgreSQL implementation of the key-value store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::key_value_store::ensure_record;
use crate::domain::repositories::{KeyValueStore, StorageError, StorageResult};

const BACKEND: &str = "postgres";

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::backend(BACKEND, e.to_string())
    }
}

/// PostgreSQL store backed by the `url_shortener` table.
///
/// Uses bound parameters for SQL injection protection. Write-once semantics
/// come from the primary key on `short_url_id`.
pub struct PgKeyValueStore {
    pool: Arc<PgPool>,
}

impl PgKeyValueStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PgKeyValueStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        ensure_record(key, value)?;

        let result = sqlx::query(
            r#"
            INSERT INTO url_shortener (short_url_id, long_url)
            VALUES ($1, $2)
            ON CONFLICT (short_url_id) DO NOTHING
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::KeyExists {
                key: key.to_string(),
            });
        }

        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let long_url: Option<String> =
            sqlx::query_scalar("SELECT long_url FROM url_shortener WHERE short_url_id = $1")
                .bind(key)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }

    fn backend_name(&self) -> &'static str {
        BACKEND
    }
}
