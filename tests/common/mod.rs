#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use url_shortener::domain::repositories::{KeyValueStore, StorageError, StorageResult};
use url_shortener::infrastructure::persistence::MemoryKeyValueStore;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::{IdGenerator, UuidIdGenerator};

pub const BASE_URL: &str = "https://api.example.org";

/// Hands out a fixed list of identifiers, then falls back to random ones.
pub struct ScriptedIdGenerator {
    ids: Mutex<VecDeque<String>>,
}

impl ScriptedIdGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
        }
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn generate(&self) -> String {
        self.ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| UuidIdGenerator.generate())
    }
}

/// A store whose backend is always down.
pub struct UnavailableStore;

#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn put(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::backend("test", "connection refused"))
    }

    async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::backend("test", "connection refused"))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "test"
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryKeyValueStore>) {
    create_test_state_with_ids(&[])
}

pub fn create_test_state_with_ids(ids: &[&str]) -> (AppState, Arc<MemoryKeyValueStore>) {
    let store = Arc::new(MemoryKeyValueStore::new());
    let state = AppState::new(
        store.clone(),
        Arc::new(ScriptedIdGenerator::new(ids)),
        BASE_URL,
        3,
    );

    (state, store)
}

pub fn create_unavailable_state() -> AppState {
    AppState::new(
        Arc::new(UnavailableStore),
        Arc::new(UuidIdGenerator),
        BASE_URL,
        3,
    )
}

/// Last path segment of a short URL.
pub fn short_url_id(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap_or_default()
}
