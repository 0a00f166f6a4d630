//! Operation types supported by the generation endpoint
//!
//! The endpoint accepts a closed set of logical operations. The wire tags
//! are camelCase, matching what the frontend sends.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of operations the generation endpoint supports
///
/// Routing is an exhaustive match over this enum, so adding a variant
/// forces every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationType {
    /// Analyze an uploaded product photo and describe the product
    ProductAnalysis,
    /// Generate headline and body copy for a single ad
    AdCopy,
    /// Generate per-platform campaign text (structured JSON output)
    CampaignText,
    /// Composite a product photo into a generated ad scene
    AdImageComposite,
    /// Generate a standalone campaign visual from a text prompt
    CampaignVisual,
}

impl OperationType {
    /// Parse a wire tag into an operation type
    ///
    /// Unrecognized tags fail with [`AppError::UnknownOperationType`]
    /// carrying the offending tag; no upstream call is made for them.
    pub fn parse(tag: &str) -> Result<Self, AppError> {
        match tag {
            "productAnalysis" => Ok(Self::ProductAnalysis),
            "adCopy" => Ok(Self::AdCopy),
            "campaignText" => Ok(Self::CampaignText),
            "adImageComposite" => Ok(Self::AdImageComposite),
            "campaignVisual" => Ok(Self::CampaignVisual),
            other => Err(AppError::UnknownOperationType(other.to_string())),
        }
    }

    /// The wire tag for this operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductAnalysis => "productAnalysis",
            Self::AdCopy => "adCopy",
            Self::CampaignText => "campaignText",
            Self::AdImageComposite => "adImageComposite",
            Self::CampaignVisual => "campaignVisual",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
