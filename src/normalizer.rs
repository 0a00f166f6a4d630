//! Request normalization
//!
//! The core of the service: routes an operation to the upstream capability
//! that serves it and reshapes the upstream envelope into one of the two
//! stable response shapes the frontend depends on.
//!
//! The routing is an exhaustive match over [`OperationType`]; the response
//! shape is fully determined by the operation, never by the upstream's
//! native shape.

use crate::error::AppError;
use crate::operation::OperationType;
use crate::upstream::types::{Candidate, Part};
use crate::upstream::GenerativeBackend;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of the two canonical response shapes
///
/// Analysis, copy, and composite operations return the upstream candidate
/// list unmodified under `candidates`; visual generation returns base64
/// images under `predictions` regardless of which capability produced them.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NormalizedResponse {
    /// Candidate-list shape for structured-generation operations
    Candidates {
        /// Upstream candidates, passed through unmodified
        candidates: Vec<Candidate>,
    },
    /// Prediction-list shape for visual-generation operations
    Predictions {
        /// Generated images as base64 payloads
        predictions: Vec<Prediction>,
    },
}

/// A single generated image in the `predictions` shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64-encoded image bytes
    pub bytes_base64_encoded: String,
}

/// Route one operation to its upstream capability and normalize the result
///
/// Makes exactly one upstream call. The payload is handed to the backend
/// opaquely; what (if anything) is extracted from it is the backend's
/// concern, so the fixture backend can ignore it entirely.
pub async fn normalize(
    backend: &dyn GenerativeBackend,
    op: OperationType,
    payload: &Value,
) -> Result<NormalizedResponse, AppError> {
    match op {
        OperationType::ProductAnalysis
        | OperationType::AdCopy
        | OperationType::CampaignText
        | OperationType::AdImageComposite => {
            let response = backend.generate_content(op, payload).await?;
            if response.candidates.is_empty() {
                return Err(AppError::EmptyUpstreamResult);
            }
            Ok(NormalizedResponse::Candidates {
                candidates: response.candidates,
            })
        }
        OperationType::CampaignVisual => {
            let response = backend.generate_image(op, payload).await?;

            let candidate = response
                .candidates
                .first()
                .ok_or(AppError::EmptyUpstreamResult)?;
            let data = candidate
                .content
                .iter()
                .flat_map(|content| content.parts.iter())
                .find_map(|part| match part {
                    Part::InlineData { inline_data, .. } => Some(inline_data.data.clone()),
                    _ => None,
                })
                .ok_or(AppError::MissingImageData)?;

            Ok(NormalizedResponse::Predictions {
                predictions: vec![Prediction {
                    bytes_base64_encoded: data,
                }],
            })
        }
    }
}
