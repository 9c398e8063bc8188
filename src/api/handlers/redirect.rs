//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /shorten/{short_url_id}`
///
/// # Response
///
/// `301 Moved Permanently` with the stored URL in `Location`. Mappings never
/// change once written, so the redirect is safe for clients to cache.
///
/// # Errors
///
/// - 404 if no mapping exists for the identifier
/// - 500 if the lookup fails or the stored URL is not a valid header value
pub async fn redirect_handler(
    Path(short_url_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.resolution_service.resolve(&short_url_id).await?;

    let location = HeaderValue::from_str(&long_url).map_err(|e| {
        tracing::error!(
            "Stored URL for {} is not a valid Location header: {}",
            short_url_id,
            e
        );
        AppError::internal("Stored URL cannot be used for a redirect.")
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
