//! Live Gemini backend
//!
//! Direct HTTP client for the Gemini `generateContent` API. Text, vision,
//! and image operations differ only in which configured model they target;
//! image generation additionally requests the IMAGE response modality.

use crate::config::UpstreamConfig;
use crate::error::AppError;
use crate::operation::OperationType;
use crate::upstream::types::{GenerateContentRequest, GenerateContentResponse};
use crate::upstream::GenerativeBackend;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize, Debug)]
struct ImageGenerationRequest {
    contents: Value,
    #[serde(rename = "generationConfig")]
    generation_config: ImageGenerationConfig,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ImageGenerationConfig {
    response_modalities: Vec<String>,
}

/// Payload shape for the prompt-to-image path
#[derive(Deserialize)]
struct VisualPayload {
    #[serde(default)]
    instances: Vec<VisualInstance>,
}

#[derive(Deserialize)]
struct VisualInstance {
    #[serde(default)]
    prompt: Option<String>,
}

/// Extract the first prompt string from `payload.instances`
fn first_prompt(payload: &Value) -> Result<String, AppError> {
    let visual: VisualPayload = serde_json::from_value(payload.clone())
        .map_err(|e| AppError::BadRequest(format!("invalid payload shape: {}", e)))?;
    visual
        .instances
        .into_iter()
        .find_map(|instance| instance.prompt)
        .ok_or_else(|| AppError::BadRequest("payload.instances must contain a prompt".to_string()))
}

/// Gemini REST backend used in live mode
///
/// Holds a shared `reqwest::Client` for connection pooling and the
/// per-operation model identifiers from configuration.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    text_model: String,
    vision_model: String,
    image_model: String,
}

impl GeminiBackend {
    /// Construct a backend from a non-empty API key and model configuration
    pub fn new(api_key: String, config: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: GEMINI_API_BASE_URL.to_string(),
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Which configured model serves a given operation
    fn model_for(&self, op: OperationType) -> &str {
        match op {
            OperationType::ProductAnalysis => &self.vision_model,
            OperationType::AdCopy | OperationType::CampaignText => &self.text_model,
            OperationType::AdImageComposite | OperationType::CampaignVisual => &self.image_model,
        }
    }

    async fn post_generate_content<Req: Serialize>(
        &self,
        model: &str,
        request: &Req,
    ) -> Result<GenerateContentResponse, AppError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        tracing::debug!(url = %url, model = %model, "Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamCallFailed(format!(
                    "Failed to send HTTP request to Gemini API: {}",
                    e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status.as_u16(),
                error_body = %error_body,
                "Gemini API returned error status"
            );

            return Err(AppError::UpstreamCallFailed(format!(
                "Gemini API returned error status {}: {}",
                status.as_u16(),
                error_body
            )));
        }

        let body = response.text().await.map_err(|e| {
            AppError::UpstreamCallFailed(format!(
                "Failed to read response body from Gemini API: {}",
                e
            ))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            AppError::UpstreamCallFailed(format!("Failed to parse Gemini response: {}", e))
        })
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate_content(
        &self,
        op: OperationType,
        payload: &Value,
    ) -> Result<GenerateContentResponse, AppError> {
        let contents = payload
            .get("contents")
            .cloned()
            .ok_or_else(|| AppError::BadRequest("payload.contents is required".to_string()))?;
        let request = GenerateContentRequest {
            contents,
            generation_config: payload.get("generationConfig").cloned(),
        };
        self.post_generate_content(self.model_for(op), &request)
            .await
    }

    async fn generate_image(
        &self,
        op: OperationType,
        payload: &Value,
    ) -> Result<GenerateContentResponse, AppError> {
        let prompt = first_prompt(payload)?;
        let request = ImageGenerationRequest {
            contents: json!([{ "parts": [{ "text": prompt }] }]),
            generation_config: ImageGenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        };
        self.post_generate_content(self.model_for(op), &request)
            .await
    }
}
