//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/article" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "https://api.example.org/shorten/ab12cd34" }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON of the expected shape
/// - 400 if `longUrl` is missing, null, empty or whitespace-only
/// - 500 if the mapping could not be stored
///
/// The `Content-Type` header is not checked. An empty body is treated like a
/// JSON `null`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let request = parse_request(&body)?;
    request.validate()?;

    let long_url = request.long_url.unwrap_or_default();
    let short_url = state.creation_service.shorten(&long_url).await?;

    Ok(Json(ShortenResponse { short_url }))
}

fn parse_request(body: &[u8]) -> Result<ShortenRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ShortenRequest::default());
    }

    let request: Option<ShortenRequest> = serde_json::from_slice(body)?;
    Ok(request.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_body_as_missing_request() {
        for body in [&b""[..], b"  \n", b"null"] {
            let request = parse_request(body).unwrap();
            assert!(request.long_url.is_none());
        }
    }

    #[test]
    fn test_parse_request_body() {
        let request = parse_request(br#"{"longUrl": "https://example.com"}"#).unwrap();

        assert_eq!(request.long_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_parse_malformed_body() {
        for body in [&b"{\"longUrl\": "[..], b"longUrl=https://example.com", b"42"] {
            let err = parse_request(body).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }
}
