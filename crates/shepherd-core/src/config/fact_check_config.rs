use serde::{Deserialize, Serialize};

use super::defaults;

/// Claim fact-checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactCheckConfig {
    /// In multi-claim passages, an `incorrect` verdict only blocks content
    /// when its confidence is at or above this value.
    pub high_confidence_threshold: f64,
    /// Claims beyond this count in a single passage are not checked.
    pub max_claims_per_passage: usize,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            high_confidence_threshold: defaults::DEFAULT_HIGH_CONFIDENCE_THRESHOLD,
            max_claims_per_passage: defaults::DEFAULT_MAX_CLAIMS_PER_PASSAGE,
        }
    }
}
