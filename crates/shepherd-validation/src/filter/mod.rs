//! ContentFilter: runs four independent checkers and aggregates findings.

pub mod doctrine;
pub mod inappropriate;
pub mod reverence;
pub mod scripture;

use shepherd_core::models::{ContentIssue, FilterContext, FilterResult};

use crate::guardrail;

/// Findings from a single checker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOutcome {
    pub issues: Vec<ContentIssue>,
    pub suggestions: Vec<String>,
}

impl CheckOutcome {
    pub fn push(&mut self, issue: ContentIssue, suggestion: Option<String>) {
        self.issues.push(issue);
        if let Some(s) = suggestion {
            self.suggestions.push(s);
        }
    }
}

/// Four-checker content filter.
///
/// Checkers share no mutable state, so they run concurrently via
/// `rayon::join`; findings are concatenated in a fixed order
/// (inappropriate, scripture, doctrine, reverence) so results are
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFilter;

impl ContentFilter {
    pub fn new() -> Self {
        Self
    }

    /// Run all checkers and aggregate. The scripture-reference checker only
    /// runs when `ctx.expects_scripture_references` is set.
    pub fn filter(&self, text: &str, ctx: &FilterContext) -> FilterResult {
        let ((inappropriate, scripture), (doctrine, reverence)) = rayon::join(
            || {
                rayon::join(
                    || inappropriate::check(text),
                    || {
                        if ctx.expects_scripture_references {
                            scripture::check(text)
                        } else {
                            CheckOutcome::default()
                        }
                    },
                )
            },
            || rayon::join(|| doctrine::check(text), || reverence::check(text)),
        );

        let mut issues = Vec::new();
        let mut suggestions: Vec<String> = Vec::new();
        for outcome in [inappropriate, scripture, doctrine, reverence] {
            issues.extend(outcome.issues);
            for s in outcome.suggestions {
                if !suggestions.contains(&s) {
                    suggestions.push(s);
                }
            }
        }

        let result = FilterResult::new(issues, suggestions);
        tracing::debug!(
            content_type = %ctx.content_type,
            issues = result.issues().len(),
            severity = result.severity().as_str(),
            approved = result.is_approved(),
            "content filtered"
        );
        result
    }

    /// Blocklist-only fast path: `false` if the text contains a guardrail
    /// blocklist phrase or a blocking inappropriate phrase. Minor phrases do
    /// not fail the quick check, mirroring [`filter`](Self::filter)'s
    /// approval cutoff.
    pub fn quick_check(&self, text: &str) -> bool {
        !(guardrail::contains_blocked_phrase(text) || inappropriate::has_blocking_match(text))
    }
}
