//! Generation API
//!
//! The single POST endpoint that accepts `{type, payload}`, validates the
//! envelope, and hands off to the normalizer. All shape decisions live in
//! [`crate::normalizer`]; this handler only parses and logs.

use crate::error::AppError;
use crate::normalizer::{normalize, NormalizedResponse};
use crate::operation::OperationType;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Handle `POST /api/generate`
///
/// The body is accepted as raw JSON so that missing or unknown fields can
/// be reported with the endpoint's own error vocabulary rather than a
/// generic deserialization rejection.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<NormalizedResponse>, AppError> {
    let tag = body
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::BadRequest("missing field: type".to_string()))?;
    let payload = body
        .get("payload")
        .ok_or_else(|| AppError::BadRequest("missing field: payload".to_string()))?;

    let op = OperationType::parse(tag)?;
    let backend = state.backend()?;

    info!(operation = %op, "Generation request received");

    match normalize(backend.as_ref(), op, payload).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!(operation = %op, error = %e, "Generation request failed");
            Err(e)
        }
    }
}

/// Fallback for non-POST methods on the generation route
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
