//! Reverence analyzer: uncapitalized divine names and flippant phrasing.

use shepherd_core::models::{ContentIssue, IssueKind, Severity};

use super::CheckOutcome;
use crate::divine_names;

pub const FLIPPANT_PHRASES: &[&str] = &[
    "god's like",
    "god is like totally",
    "jesus was like",
    "jesus is like",
    "jesus is my homeboy",
    "big guy upstairs",
    "man upstairs",
    "holy moly",
];

pub fn check(text: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for name in divine_names::find_uncapitalized(text) {
        outcome.push(
            ContentIssue::new(
                IssueKind::Reverence,
                Severity::Minor,
                format!("Divine name '{}' should be capitalized", name.found),
            )
            .at(name.found.clone()),
            Some(format!(
                "Capitalize '{}' when referring to God",
                divine_names::capitalized(name.name)
            )),
        );
    }

    let folded = text.to_lowercase();
    for phrase in FLIPPANT_PHRASES.iter().filter(|p| folded.contains(*p)) {
        outcome.push(
            ContentIssue::new(
                IssueKind::Reverence,
                Severity::Minor,
                format!("Flippant phrasing: '{phrase}'"),
            )
            .at(*phrase),
            Some("Use a reverent tone when speaking about God".to_string()),
        );
    }

    outcome
}
