//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur while serving a generation request are
/// represented by this enum. Each variant implements automatic conversion
/// to an HTTP response via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// A non-POST request reached the generation endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Pitch mode is disabled and no upstream credential is configured
    #[error("Server is not configured: GEMINI_API_KEY is missing and pitch mode is disabled")]
    MissingConfiguration,

    /// The request body is missing required fields or is malformed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The `type` field is outside the supported operation set
    #[error("Unknown operation type: {0}")]
    UnknownOperationType(String),

    /// The upstream model call failed (HTTP error, transport error, or
    /// unparseable response body)
    #[error("Upstream call failed: {0}")]
    UpstreamCallFailed(String),

    /// The upstream call succeeded but returned zero candidates
    #[error("Upstream returned no candidates")]
    EmptyUpstreamResult,

    /// The visual-generation path succeeded but no inline image part was
    /// found in the result
    #[error("No inline image data in upstream response")]
    MissingImageData,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::MissingConfiguration => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::UnknownOperationType(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::UpstreamCallFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::EmptyUpstreamResult => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::MissingImageData => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
