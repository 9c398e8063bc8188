//! Core domain entities.
//!
//! - [`Mapping`] - A short identifier bound to the long URL it redirects to

pub mod mapping;

pub use mapping::{Mapping, SHORT_URL_ID_LENGTH};
