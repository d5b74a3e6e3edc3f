//! The check pipeline run over generated text: guardrail, content filter,
//! then claim fact-checking when the context calls for it.

use shepherd_core::errors::ShepherdError;
use shepherd_core::models::{ContentIssue, FilterContext, IssueKind, Severity, ValidationResult};
use shepherd_factcheck::ClaimFactChecker;
use shepherd_validation::{ContentFilter, GuardrailValidator};

/// Findings for one piece of text.
#[derive(Debug, Default)]
pub struct Review {
    pub issues: Vec<ContentIssue>,
    /// The first failure, if any. Only policy and factual errors appear here.
    pub violation: Option<ShepherdError>,
}

impl Review {
    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }

    pub fn validation_result(&self) -> ValidationResult {
        match &self.violation {
            None => ValidationResult::valid(),
            Some(e) => ValidationResult::invalid(e.to_string()),
        }
    }

    /// Fold another item's review into this one, keeping the first violation.
    pub fn merge(&mut self, other: Review) {
        self.issues.extend(other.issues);
        if self.violation.is_none() {
            self.violation = other.violation;
        }
    }
}

/// The three checkers, bundled.
#[derive(Debug, Clone, Default)]
pub struct Reviewer {
    guardrail: GuardrailValidator,
    filter: ContentFilter,
    fact_checker: ClaimFactChecker,
}

impl Reviewer {
    pub fn new(fact_checker: ClaimFactChecker) -> Self {
        Self {
            guardrail: GuardrailValidator::new(),
            filter: ContentFilter::new(),
            fact_checker,
        }
    }

    pub fn review(&self, text: &str, ctx: &FilterContext) -> Review {
        let guardrail = self.guardrail.validate(text);
        let filtered = self.filter.filter(text, ctx);
        let (approved, severity) = (filtered.is_approved(), filtered.severity());
        let mut review = Review {
            issues: filtered.into_issues(),
            violation: None,
        };

        if !guardrail.is_valid {
            review.violation = Some(ShepherdError::PolicyViolation {
                reason: guardrail
                    .failure_reason
                    .unwrap_or_else(|| "guardrail rejected content".to_string()),
            });
        } else if !approved {
            review.violation = Some(ShepherdError::PolicyViolation {
                reason: format!("content filter rejected content ({} severity)", severity.as_str()),
            });
        }

        if ctx.requires_fact_check() {
            let results = self.fact_checker.validate_content(text);
            if let Some(bad) = self.fact_checker.blocking_error(&results) {
                let description = bad
                    .corrections
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "Claim contradicts the curated record".to_string());
                review.issues.push(
                    ContentIssue::new(IssueKind::Factual, Severity::Moderate, description)
                        .at(bad.claim.clone()),
                );
                if review.violation.is_none() {
                    review.violation = Some(ShepherdError::FactualError {
                        claim: bad.claim.clone(),
                        confidence: bad.confidence,
                    });
                }
            }
        }

        review
    }
}
