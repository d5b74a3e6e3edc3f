//! Inappropriate-content scan: fixed phrase list with per-phrase severity.

use shepherd_core::models::{ContentIssue, IssueKind, Severity};

use super::CheckOutcome;

/// A phrase and the severity it carries.
#[derive(Debug, Clone, Copy)]
pub struct InappropriatePattern {
    pub phrase: &'static str,
    pub severity: Severity,
}

const fn pattern(phrase: &'static str, severity: Severity) -> InappropriatePattern {
    InappropriatePattern { phrase, severity }
}

pub const PATTERNS: &[InappropriatePattern] = &[
    // ── Severe: mockery or denial of core claims ──
    pattern("god is dead", Severity::Severe),
    pattern("god is evil", Severity::Severe),
    pattern("jesus never existed", Severity::Severe),
    pattern("the bible is fake", Severity::Severe),
    pattern("satan is lord", Severity::Severe),
    pattern("hail satan", Severity::Severe),
    // ── Moderate: dismissive framing ──
    pattern("christianity is a lie", Severity::Moderate),
    pattern("bible is just a book", Severity::Moderate),
    pattern("jesus was a myth", Severity::Moderate),
    pattern("religion is poison", Severity::Moderate),
    pattern("faith is for fools", Severity::Moderate),
    // ── Minor: belittling vocabulary ──
    pattern("mythology", Severity::Minor),
    pattern("fairy tale", Severity::Minor),
    pattern("fairytale", Severity::Minor),
    pattern("superstition", Severity::Minor),
    pattern("make-believe", Severity::Minor),
];

pub fn check(text: &str) -> CheckOutcome {
    let folded = text.to_lowercase();
    let mut outcome = CheckOutcome::default();

    for p in PATTERNS.iter().filter(|p| folded.contains(p.phrase)) {
        let suggestion = match p.severity {
            Severity::Severe | Severity::Moderate => {
                Some("Remove language that mocks or dismisses the faith".to_string())
            }
            _ => Some(format!(
                "Replace '{}' with neutral wording such as 'account' or 'narrative'",
                p.phrase
            )),
        };
        outcome.push(
            ContentIssue::new(
                IssueKind::Inappropriate,
                p.severity,
                format!("Inappropriate phrasing: '{}'", p.phrase),
            )
            .at(p.phrase),
            suggestion,
        );
    }

    outcome
}

/// Whether any phrase of blocking severity is present.
pub fn has_blocking_match(text: &str) -> bool {
    let folded = text.to_lowercase();
    PATTERNS
        .iter()
        .any(|p| p.severity.blocks() && folded.contains(p.phrase))
}
