use serde::{Deserialize, Serialize};

use super::ContentType;

/// Per-call context for the content filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterContext {
    pub content_type: ContentType,
    /// Run the scripture-reference validator.
    pub expects_scripture_references: bool,
    /// The content is framed historically and should be fact-checked.
    pub historical_framing: bool,
}

impl FilterContext {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            expects_scripture_references: false,
            historical_framing: content_type.is_historical(),
        }
    }

    pub fn with_scripture_references(mut self, expects: bool) -> Self {
        self.expects_scripture_references = expects;
        self
    }

    pub fn with_historical_framing(mut self, historical: bool) -> Self {
        self.historical_framing = historical;
        self
    }

    /// Whether claim-level fact checking applies.
    pub fn requires_fact_check(&self) -> bool {
        self.historical_framing || self.content_type.is_historical()
    }
}

impl Default for FilterContext {
    fn default() -> Self {
        Self::new(ContentType::General)
    }
}
