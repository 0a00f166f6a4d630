//! Pitch-mode fixture backend
//!
//! Implements [`GenerativeBackend`] with canned responses so the full
//! request path can be demonstrated without an API key or upstream quota.
//! Every call pauses briefly to simulate network latency, then returns a
//! fixed fixture for the requested operation; the payload is ignored.

use crate::error::AppError;
use crate::operation::OperationType;
use crate::upstream::types::{
    Candidate, CandidateContent, GenerateContentResponse, InlineData, Part,
};
use crate::upstream::GenerativeBackend;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};
use std::time::Duration;

/// 1x1 transparent PNG standing in for generated imagery in pitch mode
pub const PLACEHOLDER_IMAGE_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Simulated upstream latency applied to every pitch-mode call
pub const DEMO_DELAY: Duration = Duration::from_millis(500);

fn text_fixture(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(CandidateContent {
                role: Some("model".to_string()),
                parts: vec![Part::Text {
                    text: text.to_string(),
                    extra: Map::new(),
                }],
                extra: Map::new(),
            }),
            extra: Map::new(),
        }],
    }
}

fn image_fixture() -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(CandidateContent {
                role: Some("model".to_string()),
                parts: vec![Part::InlineData {
                    inline_data: InlineData {
                        mime_type: "image/png".to_string(),
                        data: PLACEHOLDER_IMAGE_B64.to_string(),
                    },
                    extra: Map::new(),
                }],
                extra: Map::new(),
            }),
            extra: Map::new(),
        }],
    }
}

static PRODUCT_ANALYSIS: Lazy<GenerateContentResponse> =
    Lazy::new(|| text_fixture("a premium botanical skincare serum in a sleek bottle"));

static AD_COPY: Lazy<GenerateContentResponse> = Lazy::new(|| {
    text_fixture(
        "Headline: The Fusion of Nature & Science.\nBody: A fusion of nature's finest \
         ingredients and scientific innovation for skin that feels as good as it looks. \
         Experience the botanical brilliance.",
    )
});

static CAMPAIGN_TEXT: Lazy<GenerateContentResponse> = Lazy::new(|| {
    let platforms: Value = json!([
        {
            "platform_name": "Facebook",
            "headline": "Unlock Your Natural Glow! ✨",
            "ad_copy": "Discover the secret to radiant skin with our new Botanical Serum. \
                        Made with scientifically-proven natural extracts to nourish and \
                        revitalize. Your skin deserves the best!",
            "visual_concept": "A sleek bottle of the serum resting on a bed of fresh green \
                               leaves and delicate flowers, with soft morning light \
                               filtering through.",
            "call_to_action": "Shop Now & Glow Up"
        },
        {
            "platform_name": "Instagram",
            "headline": "Science Meets Nature.",
            "ad_copy": "Purely botanical. Powerfully scientific. Our new serum is here to \
                        transform your skincare routine. Get ready for visible results. \
                        #BotanicalBeauty #ScienceOfSkin",
            "visual_concept": "A minimalist flat-lay of the product next to a glass beaker \
                               containing a single green leaf. Clean, white marble \
                               background.",
            "call_to_action": "Tap to Shop"
        }
    ]);
    text_fixture(&platforms.to_string())
});

static AD_IMAGE_COMPOSITE: Lazy<GenerateContentResponse> = Lazy::new(image_fixture);

static CAMPAIGN_VISUAL: Lazy<GenerateContentResponse> = Lazy::new(image_fixture);

/// Returns the canned response for an operation
///
/// Exhaustive over [`OperationType`], so a new operation cannot ship
/// without a pitch-mode fixture.
fn fixture(op: OperationType) -> GenerateContentResponse {
    match op {
        OperationType::ProductAnalysis => PRODUCT_ANALYSIS.clone(),
        OperationType::AdCopy => AD_COPY.clone(),
        OperationType::CampaignText => CAMPAIGN_TEXT.clone(),
        OperationType::AdImageComposite => AD_IMAGE_COMPOSITE.clone(),
        OperationType::CampaignVisual => CAMPAIGN_VISUAL.clone(),
    }
}

/// Fixture backend used when pitch mode is enabled
pub struct DemoBackend {
    delay: Duration,
}

impl DemoBackend {
    /// Construct a backend with the standard simulated latency
    pub fn new() -> Self {
        Self { delay: DEMO_DELAY }
    }

    /// Override the simulated latency (used by tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeBackend for DemoBackend {
    async fn generate_content(
        &self,
        op: OperationType,
        _payload: &Value,
    ) -> Result<GenerateContentResponse, AppError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(operation = %op, "Serving pitch-mode fixture");
        Ok(fixture(op))
    }

    async fn generate_image(
        &self,
        op: OperationType,
        _payload: &Value,
    ) -> Result<GenerateContentResponse, AppError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(operation = %op, "Serving pitch-mode fixture");
        Ok(fixture(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> DemoBackend {
        DemoBackend::new().with_delay(Duration::ZERO)
    }

    fn first_part(response: &GenerateContentResponse) -> &Part {
        &response.candidates[0].content.as_ref().unwrap().parts[0]
    }

    #[tokio::test]
    async fn test_text_fixtures_per_operation() {
        let backend = backend();

        let analysis = backend
            .generate_content(OperationType::ProductAnalysis, &json!({}))
            .await
            .unwrap();
        assert!(matches!(
            first_part(&analysis),
            Part::Text { text, .. } if text.contains("botanical skincare serum")
        ));

        let copy = backend
            .generate_content(OperationType::AdCopy, &json!({}))
            .await
            .unwrap();
        assert!(matches!(
            first_part(&copy),
            Part::Text { text, .. } if text.starts_with("Headline:")
        ));
    }

    #[tokio::test]
    async fn test_campaign_text_fixture_is_json_platform_list() {
        let response = backend()
            .generate_content(OperationType::CampaignText, &json!({}))
            .await
            .unwrap();

        let Part::Text { text, .. } = first_part(&response) else {
            panic!("expected a text part");
        };
        let platforms: Vec<Value> = serde_json::from_str(text).unwrap();
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0]["platform_name"], "Facebook");
        assert_eq!(platforms[1]["platform_name"], "Instagram");
    }

    #[tokio::test]
    async fn test_image_operations_carry_placeholder_inline_data() {
        let backend = backend();

        for op in [OperationType::AdImageComposite, OperationType::CampaignVisual] {
            let response = backend.generate_image(op, &json!({})).await.unwrap();
            assert!(matches!(
                first_part(&response),
                Part::InlineData { inline_data, .. } if inline_data.data == PLACEHOLDER_IMAGE_B64
            ));
        }
    }

    #[tokio::test]
    async fn test_payload_is_ignored() {
        // Any payload shape, including an empty object, yields the same
        // fixture byte-for-byte.
        let backend = backend();

        let a = backend
            .generate_content(OperationType::AdCopy, &json!({}))
            .await
            .unwrap();
        let b = backend
            .generate_content(
                OperationType::AdCopy,
                &json!({
                    "contents": [{"parts": [{"text": "completely different"}]}],
                    "generationConfig": {"temperature": 1.0}
                }),
            )
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        tokio::time::pause();
        let backend = DemoBackend::new();
        let start = tokio::time::Instant::now();
        backend
            .generate_content(OperationType::AdCopy, &json!({}))
            .await
            .unwrap();
        assert!(start.elapsed() >= DEMO_DELAY);
    }
}
