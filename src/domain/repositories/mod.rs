//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, StorageError, StorageResult};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
