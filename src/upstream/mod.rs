//! Upstream generative backends
//!
//! The normalizer talks to upstream models through the [`GenerativeBackend`]
//! trait. Live mode uses the Gemini REST client; pitch mode uses a canned
//! fixture backend. Both implement the same trait, so routing and response
//! reshaping are shared between modes.

pub mod demo;
pub mod gemini;
pub mod types;

pub use demo::DemoBackend;
pub use gemini::GeminiBackend;

use crate::error::AppError;
use crate::operation::OperationType;
use async_trait::async_trait;
use serde_json::Value;
use types::GenerateContentResponse;

/// A process-wide handle to the two upstream model capabilities
///
/// Constructed once at startup and shared immutably across requests.
/// Implementations make exactly one outbound call per invocation; there is
/// no retry or fan-out at this layer.
///
/// The caller-supplied payload is handed over opaquely: each
/// implementation extracts what it needs (the live backend pulls
/// `contents`/`generationConfig` or the first `instances[].prompt`; the
/// fixture backend ignores the payload entirely). The operation type is
/// passed through so an implementation can select a concrete model per
/// operation (a deployment detail, not part of the normalization
/// contract).
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Structured generation: conversation turns in, ranked candidates out
    async fn generate_content(
        &self,
        op: OperationType,
        payload: &Value,
    ) -> Result<GenerateContentResponse, AppError>;

    /// Prompt-to-image generation: a text prompt in, candidates carrying
    /// inline image data out
    async fn generate_image(
        &self,
        op: OperationType,
        payload: &Value,
    ) -> Result<GenerateContentResponse, AppError>;
}
