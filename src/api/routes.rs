//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL creation and redirect routes.
///
/// # Endpoints
///
/// - `POST /shorten`                 - Create a short URL
/// - `GET  /shorten/{short_url_id}`  - Redirect to the stored long URL
pub fn shorten_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten/{short_url_id}", get(redirect_handler))
}
