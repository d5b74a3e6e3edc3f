//! SafetyOrchestrator: the guarded entry point for every content operation.
//!
//! Per call: record the request, call the provider under a timeout, review
//! the output, substitute fallback content on any failure, and record the
//! response. Callers always receive content unless the orchestrator was
//! never initialized; translation comparison is the one operation that
//! surfaces provider failures.

use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use tracing::Instrument;

use shepherd_core::config::{OrchestratorConfig, ShepherdConfig};
use shepherd_core::constants::META_CONTENT_HASH;
use shepherd_core::errors::{ProviderError, ShepherdError, ShepherdResult};
use shepherd_core::models::{
    Comparison, ContentType, Devotion, FilterContext, HistoricalContext, Insight, Passage,
    PerspectiveSet,
};
use shepherd_core::traits::IContentProvider;
use shepherd_factcheck::ClaimFactChecker;
use shepherd_fallback::FallbackContentPool;
use shepherd_observability::tracing_setup::events;
use shepherd_observability::{operation_span, provider_span, validation_span};
use shepherd_observability::{MonitoringService, ResponseRecord};

use crate::guarded::Guarded;
use crate::pending::PendingRequest;
use crate::review::{Review, Reviewer};

/// Operation names, used in spans and event metadata.
pub mod ops {
    pub const INSIGHTS: &str = "generate_insights";
    pub const DEVOTION: &str = "generate_devotion";
    pub const EXPLANATION: &str = "explain_passage";
    pub const COMPARISON: &str = "compare_translations";
    pub const HISTORICAL: &str = "historical_context";
    pub const FREEFORM: &str = "generate_content";
}

const COMPONENT: &str = "SafetyOrchestrator";

/// Words in an explanation context that put the explanation under a
/// historical framing, and so under fact-checking.
const HISTORICAL_CUES: &[&str] = &[
    "histor",
    "archaeolog",
    "ancient",
    "century",
    "dating",
    "date of",
    "period",
];

pub struct SafetyOrchestrator<P: IContentProvider> {
    provider: OnceLock<P>,
    reviewer: Reviewer,
    fallback: FallbackContentPool,
    monitor: Arc<MonitoringService>,
    config: OrchestratorConfig,
    perspectives: PerspectiveSet,
}

impl<P: IContentProvider> SafetyOrchestrator<P> {
    /// Build an orchestrator with its own monitoring service.
    pub fn new(config: &ShepherdConfig) -> Self {
        let monitor = Arc::new(MonitoringService::new(config.monitoring.clone()));
        Self::with_monitor(config, monitor)
    }

    /// Build an orchestrator that records into a shared monitoring service.
    pub fn with_monitor(config: &ShepherdConfig, monitor: Arc<MonitoringService>) -> Self {
        Self {
            provider: OnceLock::new(),
            reviewer: Reviewer::new(ClaimFactChecker::new(config.fact_check.clone())),
            fallback: FallbackContentPool::new(),
            monitor,
            config: config.orchestrator.clone(),
            perspectives: PerspectiveSet::default(),
        }
    }

    /// Select the traditions whose readings generated and fallback text
    /// should acknowledge. Wording only; checks are unaffected.
    pub fn with_perspectives(mut self, perspectives: PerspectiveSet) -> Self {
        self.perspectives = perspectives;
        self
    }

    /// Attach the content provider. Exactly once.
    pub fn initialize(&self, provider: P) -> ShepherdResult<()> {
        self.provider
            .set(provider)
            .map_err(|_| ShepherdError::AlreadyInitialized {
                component: COMPONENT.to_string(),
            })?;
        tracing::info!(
            timeout_ms = self.config.provider_timeout_ms,
            "safety orchestrator initialized"
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.provider.get().is_some()
    }

    pub fn monitor(&self) -> &Arc<MonitoringService> {
        &self.monitor
    }

    pub fn perspectives(&self) -> &PerspectiveSet {
        &self.perspectives
    }

    // ── Operations ─────────────────────────────────────────────────────────

    /// Study insights, reviewed item by item. Each rejected insight is
    /// replaced by the fallback insight at the same position.
    pub async fn generate_insights(&self, passage: &Passage) -> ShepherdResult<Guarded<Vec<Insight>>> {
        let provider = self.provider()?;
        let ctx = self.context(ContentType::Insight);
        let hints = self.perspectives.prompt_hints();
        async {
            let pending = PendingRequest::open(&self.monitor, ctx.content_type, ops::INSIGHTS);
            let (result, elapsed) = self
                .call(ops::INSIGHTS, provider.generate_insights(passage, &hints))
                .await;
            let items = match result.and_then(non_empty) {
                Ok(items) => items,
                Err(error) => {
                    let content = self.fallback.insights();
                    let id = self.provider_failed(pending, &error, elapsed, true);
                    return Ok(Guarded::new(content, true, id));
                }
            };

            let mut review = Review::default();
            let mut replaced = false;
            let content: Vec<Insight> = items
                .into_iter()
                .enumerate()
                .map(|(index, insight)| {
                    let item_review = self.review(&insight.checked_text(), &ctx);
                    let passed = item_review.passed();
                    review.merge(item_review);
                    if passed {
                        insight
                    } else {
                        replaced = true;
                        self.fallback.insight(index)
                    }
                })
                .collect();

            let text = content
                .iter()
                .map(Insight::checked_text)
                .collect::<Vec<_>>()
                .join("\n");
            let id = self.finish(pending, review, replaced, elapsed, &text);
            Ok(Guarded::new(content, replaced, id))
        }
        .instrument(operation_span!(ops::INSIGHTS, ctx.content_type))
        .await
    }

    pub async fn generate_devotion(&self, passage: &Passage) -> ShepherdResult<Guarded<Devotion>> {
        let provider = self.provider()?;
        let hints = self.perspectives.prompt_hints();
        self.guard_single(
            ops::DEVOTION,
            self.context(ContentType::Devotion),
            provider.generate_devotion(passage, &hints),
            Devotion::checked_text,
            || self.fallback.devotion(passage, &self.perspectives),
        )
        .await
    }

    /// Explain a passage. A historically framed `context` puts the
    /// explanation under claim fact-checking.
    pub async fn explain_passage(
        &self,
        passage: &Passage,
        context: &str,
    ) -> ShepherdResult<Guarded<String>> {
        let provider = self.provider()?;
        let hints = self.perspectives.prompt_hints();
        let ctx = self
            .context(ContentType::Explanation)
            .with_historical_framing(mentions_history(context));
        self.guard_single(
            ops::EXPLANATION,
            ctx,
            provider.explain_passage(passage, context, &hints),
            String::clone,
            || self.fallback.explanation(&self.perspectives),
        )
        .await
    }

    /// Compare translations. Recommendations are reviewed individually and
    /// replaced on rejection. Provider failures are recorded and returned
    /// as errors since there is no fallback comparison.
    pub async fn compare_translations(
        &self,
        passage: &Passage,
        translations: &[String],
    ) -> ShepherdResult<Guarded<Comparison>> {
        let provider = self.provider()?;
        let ctx = self.context(ContentType::TranslationComparison);
        async {
            let pending = PendingRequest::open(&self.monitor, ctx.content_type, ops::COMPARISON);
            let (result, elapsed) = self
                .call(ops::COMPARISON, provider.compare_translations(passage, translations))
                .await;
            let mut comparison = match result {
                Ok(comparison) => comparison,
                Err(error) => {
                    self.provider_failed(pending, &error, elapsed, false);
                    return Err(ShepherdError::ProviderFailure(error));
                }
            };

            let mut review = Review::default();
            let mut replaced = false;
            for (index, recommendation) in comparison.recommendations.iter_mut().enumerate() {
                let item_review = self.review(recommendation, &ctx);
                if !item_review.passed() {
                    *recommendation = self.fallback.recommendation(index);
                    replaced = true;
                }
                review.merge(item_review);
            }

            let text = comparison.recommendations.join("\n");
            let id = self.finish(pending, review, replaced, elapsed, &text);
            Ok(Guarded::new(comparison, replaced, id))
        }
        .instrument(operation_span!(ops::COMPARISON, ctx.content_type))
        .await
    }

    /// Historical background. Always fact-checked.
    pub async fn historical_context(
        &self,
        passage: &Passage,
    ) -> ShepherdResult<Guarded<HistoricalContext>> {
        let provider = self.provider()?;
        self.guard_single(
            ops::HISTORICAL,
            self.context(ContentType::HistoricalContext),
            provider.historical_context(passage),
            HistoricalContext::checked_text,
            || self.fallback.historical_context(),
        )
        .await
    }

    /// Free-form generation, reviewed under the caller's content type.
    pub async fn generate_content(
        &self,
        prompt: &str,
        content_type: ContentType,
    ) -> ShepherdResult<Guarded<String>> {
        let provider = self.provider()?;
        self.guard_single(
            ops::FREEFORM,
            self.context(content_type),
            provider.generate_freeform(prompt),
            String::clone,
            || self.fallback_text(content_type),
        )
        .await
    }

    // ── Pipeline ───────────────────────────────────────────────────────────

    fn provider(&self) -> ShepherdResult<&P> {
        self.provider.get().ok_or_else(|| ShepherdError::NotInitialized {
            component: COMPONENT.to_string(),
        })
    }

    fn context(&self, content_type: ContentType) -> FilterContext {
        FilterContext::new(content_type)
            .with_scripture_references(self.config.expect_scripture_references)
    }

    fn fallback_text(&self, content_type: ContentType) -> String {
        match content_type {
            ContentType::General => self.fallback.freeform(),
            ContentType::Explanation => self.fallback.explanation(&self.perspectives),
            other => self.fallback.text(other).to_string(),
        }
    }

    /// The request/call/review/record sequence for operations returning a
    /// single reviewable value.
    async fn guard_single<T>(
        &self,
        operation: &'static str,
        ctx: FilterContext,
        call: impl Future<Output = Result<T, ProviderError>>,
        text_of: impl Fn(&T) -> String,
        fallback: impl FnOnce() -> T,
    ) -> ShepherdResult<Guarded<T>> {
        async {
            let pending = PendingRequest::open(&self.monitor, ctx.content_type, operation);
            let (result, elapsed) = self.call(operation, call).await;
            let content = match result {
                Ok(content) => content,
                Err(error) => {
                    let content = fallback();
                    let id = self.provider_failed(pending, &error, elapsed, true);
                    return Ok(Guarded::new(content, true, id));
                }
            };

            let review = self.review(&text_of(&content), &ctx);
            let (content, fallback_used) = if review.passed() {
                (content, false)
            } else {
                (fallback(), true)
            };
            let id = self.finish(pending, review, fallback_used, elapsed, &text_of(&content));
            Ok(Guarded::new(content, fallback_used, id))
        }
        .instrument(operation_span!(operation, ctx.content_type))
        .await
    }

    /// Run the provider call under the configured timeout. The returned
    /// duration covers the call only.
    async fn call<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, ProviderError>>,
    ) -> (Result<T, ProviderError>, Duration) {
        let limit_ms = self.config.provider_timeout_ms;
        let started = Instant::now();
        let outcome = tokio::time::timeout(Duration::from_millis(limit_ms), call)
            .instrument(provider_span!(operation))
            .await;
        let elapsed = started.elapsed();
        let result = outcome.unwrap_or(Err(ProviderError::Timeout { after_ms: limit_ms }));
        (result, elapsed)
    }

    fn review(&self, text: &str, ctx: &FilterContext) -> Review {
        let _span = validation_span!(ctx.content_type).entered();
        self.reviewer.review(text, ctx)
    }

    /// Record an error event and a failed response. Returns the event id.
    fn provider_failed(
        &self,
        pending: PendingRequest<'_>,
        error: &ProviderError,
        elapsed: Duration,
        fallback_used: bool,
    ) -> String {
        let content_type = pending.content_type().to_string();
        events::provider_failed(pending.operation(), &error.to_string());
        pending.record_error(error);
        if fallback_used {
            events::fallback_used(&content_type, "provider failure");
        }
        pending.complete(ResponseRecord::new(false, elapsed).with_fallback(fallback_used))
    }

    /// Record a successful provider response with its review outcome.
    fn finish(
        &self,
        pending: PendingRequest<'_>,
        review: Review,
        fallback_used: bool,
        elapsed: Duration,
        delivered: &str,
    ) -> String {
        let validation = review.validation_result();
        if let Some(reason) = &validation.failure_reason {
            let content_type = pending.content_type().to_string();
            events::validation_failed(&content_type, reason);
            events::fallback_used(&content_type, "validation failure");
        }
        tracing::debug!(
            event_id = pending.id(),
            issues = review.issues.len(),
            fallback_used,
            "response reviewed"
        );
        pending.complete(
            ResponseRecord::new(true, elapsed)
                .with_validation(validation)
                .with_fallback(fallback_used)
                .with_issues(review.issues)
                .with_metadata(META_CONTENT_HASH, content_hash(delivered)),
        )
    }
}

fn non_empty(items: Vec<Insight>) -> Result<Vec<Insight>, ProviderError> {
    if items.is_empty() {
        return Err(ProviderError::InvalidResponse {
            reason: "no insights returned".to_string(),
        });
    }
    Ok(items)
}

/// Whether an explanation context asks for historical framing.
pub fn mentions_history(context: &str) -> bool {
    let lower = context.to_lowercase();
    HISTORICAL_CUES.iter().any(|cue| lower.contains(cue))
}

/// blake3 hex digest of the delivered text.
fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
