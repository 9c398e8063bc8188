//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CreationService, ResolutionService};
use crate::domain::repositories::KeyValueStore;
use crate::utils::code_generator::IdGenerator;

/// Handles to the services, cloned into every request.
///
/// The store is created once at startup and shared by both services; handlers
/// only reach it through them (and the health check).
#[derive(Clone)]
pub struct AppState {
    pub creation_service: Arc<CreationService>,
    pub resolution_service: Arc<ResolutionService>,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Wires both services around a single store.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        id_generator: Arc<dyn IdGenerator>,
        base_url: &str,
        max_attempts: usize,
    ) -> Self {
        let creation_service = Arc::new(CreationService::new(
            store.clone(),
            id_generator,
            base_url,
            max_attempts,
        ));
        let resolution_service = Arc::new(ResolutionService::new(store.clone()));

        Self {
            creation_service,
            resolution_service,
            store,
        }
    }
}
