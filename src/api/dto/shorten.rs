//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::application::services::creation_service::is_blank;

/// Request to shorten a long URL.
///
/// ```json
/// { "longUrl": "https://example.com/article" }
/// ```
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Stored exactly as sent.
    #[validate(
        required(message = "longUrl cannot be null or empty."),
        custom(function = "not_blank", message = "longUrl cannot be null or empty.")
    )]
    pub long_url: Option<String>,
}

/// Response carrying the created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
