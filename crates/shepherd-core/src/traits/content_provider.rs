//! IContentProvider: the upstream content-generation collaborator.

use crate::errors::ProviderError;
use crate::models::{Comparison, Devotion, HistoricalContext, Insight, Passage, PromptHints};

/// Upstream content generation, one method per use case.
///
/// Every call is treated as fallible and slow. Implementations own transport,
/// prompting, and response parsing; the orchestrator only sees typed content.
#[allow(async_fn_in_trait)]
pub trait IContentProvider: Send + Sync {
    /// Generate study insights for a passage.
    async fn generate_insights(
        &self,
        passage: &Passage,
        hints: &PromptHints,
    ) -> Result<Vec<Insight>, ProviderError>;

    /// Generate a devotion rooted in a passage.
    async fn generate_devotion(
        &self,
        passage: &Passage,
        hints: &PromptHints,
    ) -> Result<Devotion, ProviderError>;

    /// Explain a passage within a caller-supplied context.
    async fn explain_passage(
        &self,
        passage: &Passage,
        context: &str,
        hints: &PromptHints,
    ) -> Result<String, ProviderError>;

    /// Compare renderings of a passage across translations.
    async fn compare_translations(
        &self,
        passage: &Passage,
        translations: &[String],
    ) -> Result<Comparison, ProviderError>;

    /// Describe the historical setting of a passage.
    async fn historical_context(&self, passage: &Passage)
        -> Result<HistoricalContext, ProviderError>;

    /// Free-form generation from a raw prompt.
    async fn generate_freeform(&self, prompt: &str) -> Result<String, ProviderError>;
}
