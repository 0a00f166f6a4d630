//! Gemini API payload types
//!
//! Structs that mirror the Gemini API JSON format, shared by the live
//! client and the demo fixture backend. Response candidates are forwarded
//! to the caller unmodified, so every envelope keeps unknown fields via
//! `#[serde(flatten)]`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request structure for the `generateContent` endpoint
///
/// `contents` and `generationConfig` are caller-supplied and forwarded
/// opaquely; their inner shape is the upstream's contract, not ours.
#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    /// Conversation turns as supplied by the caller
    pub contents: Value,
    /// Optional generation parameters (temperature, output format, ...)
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<Value>,
}

/// Top-level `generateContent` response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Ranked candidate outputs; may be empty
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single candidate response from the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// The content of this candidate; absent for blocked candidates that
    /// carry only a finish reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    /// Remaining response fields (finishReason, index, ...), preserved
    /// so candidates round-trip to the caller unmodified
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Content structure containing the parts of a candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Role of the content (e.g. "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Remaining content fields, preserved for round-tripping
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Untagged union of the content part kinds we distinguish
///
/// Variant order matters for `#[serde(untagged)]` decoding; unrecognized
/// part shapes fall through to `Other` and round-trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text fragment
    Text {
        /// The text content
        text: String,
        /// Sibling fields (thought markers, ...), preserved for
        /// round-tripping
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// Inline base64-encoded media
    InlineData {
        /// The inline payload
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
        /// Sibling fields, preserved for round-tripping
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// Any part shape we do not inspect (function calls, ...)
    Other(Value),
}

/// Base64 inline payload used for image parts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the encoded data (e.g. "image/png")
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_decodes_text_and_inline_data() {
        let parts: Vec<Part> = serde_json::from_value(json!([
            {"text": "hello"},
            {"inlineData": {"mimeType": "image/png", "data": "abc123"}}
        ]))
        .unwrap();

        assert!(matches!(&parts[0], Part::Text { text, .. } if text == "hello"));
        assert!(
            matches!(&parts[1], Part::InlineData { inline_data, .. } if inline_data.data == "abc123")
        );
    }

    #[test]
    fn test_part_round_trips_sibling_fields() {
        // The live API emits parts with fields next to `text`, e.g. thought
        // markers; they must survive re-serialization untouched.
        let raw = json!({"text": "hello", "thought": true});
        let part: Part = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(&part, Part::Text { text, .. } if text == "hello"));
        assert_eq!(serde_json::to_value(&part).unwrap(), raw);

        let raw = json!({
            "inlineData": {"mimeType": "image/png", "data": "abc123"},
            "videoMetadata": {"fps": 1}
        });
        let part: Part = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(&part, Part::InlineData { .. }));
        assert_eq!(serde_json::to_value(&part).unwrap(), raw);
    }

    #[test]
    fn test_contentless_candidate_round_trips() {
        // Blocked candidates may carry only a finish reason.
        let raw = json!({"finishReason": "SAFETY"});
        let candidate: Candidate = serde_json::from_value(raw.clone()).unwrap();
        assert!(candidate.content.is_none());
        assert_eq!(serde_json::to_value(&candidate).unwrap(), raw);
    }

    #[test]
    fn test_unknown_part_shape_falls_through_to_other() {
        let part: Part =
            serde_json::from_value(json!({"functionCall": {"name": "f"}})).unwrap();
        assert!(matches!(part, Part::Other(_)));
    }

    #[test]
    fn test_candidate_round_trips_unknown_fields() {
        let raw = json!({
            "content": {
                "parts": [{"text": "hi"}],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        });

        let candidate: Candidate = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&candidate).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_generate_content_request_skips_absent_config() {
        let request = GenerateContentRequest {
            contents: json!([{"parts": [{"text": "hi"}]}]),
            generation_config: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("generationConfig").is_none());
    }
}
