//! Application layer services implementing business logic.
//!
//! Services consume the store and generator traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::creation_service::CreationService`] - Registers long URLs
//! - [`services::resolution_service::ResolutionService`] - Looks up redirect targets

pub mod services;
