//! Redis implementation of the key-value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::info;

use crate::domain::repositories::key_value_store::ensure_record;
use crate::domain::repositories::{KeyValueStore, StorageError, StorageResult};

const BACKEND: &str = "redis";

impl From<RedisError> for StorageError {
    fn from(e: RedisError) -> Self {
        StorageError::backend(BACKEND, e.to_string())
    }
}

/// Redis store keeping one string key per mapping.
///
/// Uses `ConnectionManager` for automatic reconnection; clones share the
/// underlying multiplexed connection. Records are written with `SETNX` and
/// carry no TTL.
pub struct RedisKeyValueStore {
    connection: ConnectionManager,
    key_prefix: String,
}

impl RedisKeyValueStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StorageResult<Self> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self {
            connection: manager,
            key_prefix: "url:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_url_id: &str) -> String {
        format!("{}{}", self.key_prefix, short_url_id)
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        ensure_record(key, value)?;

        let mut conn = self.connection.clone();
        let created: bool = conn.set_nx(self.build_key(key), value).await?;

        if !created {
            return Err(StorageError::KeyExists {
                key: key.to_string(),
            });
        }

        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut conn = self.connection.clone();
        let long_url: Option<String> = conn.get(self.build_key(key)).await?;

        Ok(long_url)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        BACKEND
    }
}
