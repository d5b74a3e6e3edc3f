//! ClaimFactChecker: classify, dispatch, summarize.

use shepherd_core::config::FactCheckConfig;
use shepherd_core::models::{ClaimType, FactCheckResult, FactCheckSummary};

use crate::{classify, extract, verifiers};

/// Stateless claim checker over the curated dataset.
#[derive(Debug, Clone, Default)]
pub struct ClaimFactChecker {
    config: FactCheckConfig,
}

impl ClaimFactChecker {
    pub fn new(config: FactCheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FactCheckConfig {
        &self.config
    }

    /// Classify without verifying.
    pub fn classify(&self, claim: &str) -> ClaimType {
        classify::classify(claim)
    }

    /// Classify a single claim and run the matching verifier.
    pub fn check_claim(&self, claim: &str) -> FactCheckResult {
        let claim = claim.trim();
        let claim_type = classify::classify(claim);
        let result = verifiers::dispatch(claim_type, claim);
        tracing::debug!(
            claim_type = claim_type.as_str(),
            verdict = ?result.verdict,
            confidence = result.confidence,
            "claim checked"
        );
        result
    }

    /// Check every candidate claim in `text`, up to `max_claims_per_passage`.
    pub fn validate_content(&self, text: &str) -> Vec<FactCheckResult> {
        let candidates = extract::candidate_claims(text);
        if candidates.len() > self.config.max_claims_per_passage {
            tracing::debug!(
                found = candidates.len(),
                limit = self.config.max_claims_per_passage,
                "claim limit reached; remaining sentences skipped"
            );
        }
        candidates
            .into_iter()
            .take(self.config.max_claims_per_passage)
            .map(|c| self.check_claim(c))
            .collect()
    }

    pub fn summarize(&self, results: &[FactCheckResult]) -> FactCheckSummary {
        FactCheckSummary::from_results(results)
    }

    /// The result that makes a passage fail fact-checking, if any.
    ///
    /// A single checked claim fails on any `incorrect` verdict. In a broader
    /// passage only `incorrect` verdicts at or above
    /// `high_confidence_threshold` fail it.
    pub fn blocking_error<'a>(&self, results: &'a [FactCheckResult]) -> Option<&'a FactCheckResult> {
        let single = results.len() == 1;
        results.iter().find(|r| {
            r.is_incorrect() && (single || r.confidence >= self.config.high_confidence_threshold)
        })
    }
}
