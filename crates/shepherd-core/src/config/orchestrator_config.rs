use serde::{Deserialize, Serialize};

use super::defaults;

/// Safety orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Upper bound on a single provider call.
    pub provider_timeout_ms: u64,
    /// Run the scripture-reference validator on generated text.
    pub expect_scripture_references: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            provider_timeout_ms: defaults::DEFAULT_PROVIDER_TIMEOUT_MS,
            expect_scripture_references: defaults::DEFAULT_EXPECT_SCRIPTURE_REFERENCES,
        }
    }
}
