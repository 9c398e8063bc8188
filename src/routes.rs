//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`                - Create a short URL
//! - `GET  /shorten/{short_url_id}` - Redirect to the long URL
//! - `GET  /health`                 - Health check of the key-value store
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes with tracing applied, without path normalization.
///
/// Exposed for in-process tests that need a plain [`Router`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::shorten_routes())
        .with_state(state)
        .layer(tracing::layer())
}
