use serde::Serialize;

use super::{ContentIssue, Severity};

/// Aggregated outcome of the content filter.
///
/// Fields are private so that `is_approved == (severity < Moderate)` and
/// `severity == max(issue severities)` hold for every value in existence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    is_approved: bool,
    issues: Vec<ContentIssue>,
    suggestions: Vec<String>,
    severity: Severity,
}

impl FilterResult {
    /// Build a result from collected issues; severity and approval are derived.
    pub fn new(issues: Vec<ContentIssue>, suggestions: Vec<String>) -> Self {
        let severity = issues
            .iter()
            .map(|i| i.severity)
            .max()
            .unwrap_or(Severity::None);
        Self {
            is_approved: !severity.blocks(),
            issues,
            suggestions,
            severity,
        }
    }

    /// A clean result with no findings.
    pub fn clean() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn is_approved(&self) -> bool {
        self.is_approved
    }

    pub fn issues(&self) -> &[ContentIssue] {
        &self.issues
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Consume the result, returning its issues.
    pub fn into_issues(self) -> Vec<ContentIssue> {
        self.issues
    }
}
