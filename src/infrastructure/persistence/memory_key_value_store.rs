//! In-memory implementation of the key-value store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::key_value_store::ensure_record;
use crate::domain::repositories::{KeyValueStore, StorageError, StorageResult};

/// A store that keeps mappings in a process-local map.
///
/// Nothing survives a restart. Intended for development and tests.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory store (mappings are not persisted)");
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if no mapping has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        ensure_record(key, value)?;

        match self.records.write().await.entry(key.to_string()) {
            Entry::Occupied(_) => Err(StorageError::KeyExists {
                key: key.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(())
            }
        }
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
