//! Server error types

use crate::api::rest::AVAILABLE_ENDPOINTS;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tdee_core::ValidationError;
use thiserror::Error;

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// One or more input fields were rejected
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Request body could not be read as JSON
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),

    /// No route for the requested path and method
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client exceeded its request quota
    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
        /// Human-readable window length, e.g. "15 minutes"
        window: String,
    },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "errors": errors,
                })),
            )
                .into_response(),
            ServerError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "errors": [msg],
                })),
            )
                .into_response(),
            ServerError::InternalError(msg) => {
                // Details stay in the log
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": "Internal server error",
                    })),
                )
                    .into_response()
            }
            ServerError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "error": "Endpoint not found",
                    "available_endpoints": AVAILABLE_ENDPOINTS,
                })),
            )
                .into_response(),
            ServerError::RateLimited {
                retry_after_secs,
                window,
            } => {
                let mut response = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({
                        "success": false,
                        "error": "Too many requests from this IP, please try again later",
                        "retry_after": window,
                    })),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
                response
            }
        }
    }
}

impl From<Vec<ValidationError>> for ServerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ServerError::Validation(errors.iter().map(ToString::to_string).collect())
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
