//! Short identifier resolution service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;

pub const NOT_FOUND_MESSAGE: &str = "URL not found for the given shortUrlId.";
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to look up URL.";

/// Service for looking up the redirect target of a short identifier.
///
/// Read-only: resolving never writes to the store, so repeated calls return the
/// same result for as long as the stored mapping exists.
pub struct ResolutionService {
    store: Arc<dyn KeyValueStore>,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the long URL stored under `short_url_id`, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the identifier.
    /// Returns [`AppError::Storage`] if the store lookup fails.
    pub async fn resolve(&self, short_url_id: &str) -> Result<String, AppError> {
        if short_url_id.is_empty() {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        match self.store.get(short_url_id).await {
            Ok(Some(long_url)) => {
                debug!("Resolved shortUrlId {} -> {}", short_url_id, long_url);
                Ok(long_url)
            }
            Ok(None) => {
                debug!("No long URL found for shortUrlId: {}", short_url_id);
                Err(AppError::not_found(NOT_FOUND_MESSAGE))
            }
            Err(e) => {
                error!("Error looking up shortUrlId {}: {}", short_url_id, e);
                Err(AppError::storage(LOOKUP_FAILED_MESSAGE, e))
            }
        }
    }
}
