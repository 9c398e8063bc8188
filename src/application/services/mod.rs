//! Business logic services for the application layer.

pub mod creation_service;
pub mod resolution_service;

pub use creation_service::CreationService;
pub use resolution_service::ResolutionService;
