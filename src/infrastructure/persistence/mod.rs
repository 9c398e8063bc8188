//! Key-value store backends.
//!
//! Concrete implementations of [`crate::domain::repositories::KeyValueStore`].
//!
//! - [`PgKeyValueStore`] - `url_shortener` table in PostgreSQL (default)
//! - [`RedisKeyValueStore`] - `url:{id}` keys in Redis
//! - [`MemoryKeyValueStore`] - Process-local map for development and tests

pub mod memory_key_value_store;
pub mod pg_key_value_store;
pub mod redis_key_value_store;

pub use memory_key_value_store::MemoryKeyValueStore;
pub use pg_key_value_store::PgKeyValueStore;
pub use redis_key_value_store::RedisKeyValueStore;
