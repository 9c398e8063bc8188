//! Application error type and its HTTP mapping.
//!
//! Every failure reaching a handler is one of four discriminable kinds so the
//! transport can pick the right status code:
//!
//! | Variant | Status |
//! |---|---|
//! | [`AppError::Validation`] | 400 Bad Request |
//! | [`AppError::NotFound`] | 404 Not Found |
//! | [`AppError::Storage`] | 500 Internal Server Error |
//! | [`AppError::Internal`] | 500 Internal Server Error |
//!
//! Error bodies are serialized as `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::StorageError;

/// Message returned when the request body cannot be deserialized.
pub const INVALID_BODY_MESSAGE: &str = "Request body is invalid. Ensure it's in JSON format.";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: StorageError,
    },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>, source: StorageError) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        tracing::debug!("Error parsing request body: {}", e);
        AppError::bad_request(INVALID_BODY_MESSAGE)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Request validation failed.".to_string());

        AppError::bad_request(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::storage("down", StorageError::backend("redis", "refused")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("oops").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_client_message_only() {
        let err = AppError::storage(
            "Failed to store URL.",
            StorageError::backend("postgres", "connection reset"),
        );

        assert_eq!(err.to_string(), "Failed to store URL.");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_maps_to_invalid_body() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), INVALID_BODY_MESSAGE);
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = AppError::not_found("URL not found for the given shortUrlId.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
