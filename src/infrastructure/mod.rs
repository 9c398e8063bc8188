//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Key-value store backends (PostgreSQL, Redis, in-memory)

pub mod persistence;
