//! Short identifier generation.
//!
//! Identifiers are the leading characters of a random v4 UUID. Truncation keeps
//! URLs short at the cost of a small collision probability, which the creation
//! service absorbs with a conditional write and bounded retry.

use uuid::Uuid;

use crate::domain::entities::SHORT_URL_ID_LENGTH;

/// Source of candidate short identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produces a new candidate identifier.
    fn generate(&self) -> String;
}

/// Generates identifiers from random v4 UUIDs.
///
/// Produces 8 lowercase hex characters (32 bits of randomness).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SHORT_URL_ID_LENGTH);
        id
    }
}
