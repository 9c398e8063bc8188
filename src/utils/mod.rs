//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short identifier generation

pub mod code_generator;
