//! Key-value store contract for short identifier mappings.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A write-once `put` found a record already stored under the key.
    #[error("key already exists: {key}")]
    KeyExists { key: String },

    /// The key or value violated the store's record constraints.
    #[error("invalid record: {0}")]
    InvalidRecord(&'static str),

    /// The backing service failed or was unavailable.
    #[error("{backend} error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}

impl StorageError {
    /// Creates a backend failure for the named store.
    pub fn backend(backend: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            backend,
            message: message.into(),
        }
    }

    /// Returns true if the error is a write-once conflict.
    pub fn is_key_exists(&self) -> bool {
        matches!(self, Self::KeyExists { .. })
    }
}

/// Result type for store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable mapping from short identifiers to long URLs.
///
/// Every operation is a single-record read or write. Implementations must be
/// safe to call concurrently from unrelated requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgKeyValueStore`] - PostgreSQL table
/// - [`crate::infrastructure::persistence::RedisKeyValueStore`] - Redis keys
/// - [`crate::infrastructure::persistence::MemoryKeyValueStore`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Writes a new record.
    ///
    /// The write is conditional: an existing record is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::KeyExists`] if `key` is already stored.
    /// Returns [`StorageError::InvalidRecord`] if `key` or `value` is empty.
    /// Returns [`StorageError::Backend`] on I/O or availability failures.
    async fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if found
    /// - `Ok(None)` if absent
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] on I/O or availability failures.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Checks if the backing service is reachable.
    async fn health_check(&self) -> bool;

    /// Short name of the backend, used in logs and health output.
    fn backend_name(&self) -> &'static str;
}

/// Rejects records that break the non-empty key/value constraint.
pub(crate) fn ensure_record(key: &str, value: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidRecord("key must not be empty"));
    }
    if value.is_empty() {
        return Err(StorageError::InvalidRecord("value must not be empty"));
    }
    Ok(())
}
