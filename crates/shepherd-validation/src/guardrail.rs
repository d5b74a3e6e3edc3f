//! GuardrailValidator: static rule checks with a binary verdict.

use std::sync::LazyLock;

use regex::Regex;
use shepherd_core::models::ValidationResult;

use crate::divine_names;

/// Phrases that are rejected outright, matched against case-folded text.
pub const BLOCKED_PHRASES: &[&str] = &[
    "the bible is fake",
    "the bible is a myth",
    "jesus never existed",
    "jesus was a fraud",
    "jesus was just a man",
    "god is dead",
    "god is evil",
    "god doesn't exist",
    "god does not exist",
    "christianity is a lie",
    "satan is lord",
    "hail satan",
];

static SALVATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(salvation|saved|eternal life)\b").unwrap());

static WORKS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(earn|earns|earned|earning|good works|by works|deserve|deserves|merit)\b")
        .unwrap()
});

/// "all paths"/"all religions" within the same sentence as "god", either order.
static UNIVERSALISM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\ball (paths|religions)\b[^.!?]{0,60}\bgod\b|\bgod\b[^.!?]{0,60}\ball (paths|religions)\b",
    )
    .unwrap()
});

static AUTHORITY_DENIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(bible|scriptures?)\b[^.!?]{0,40}\b(has errors|contains errors|is full of errors|is wrong|are wrong)\b",
    )
    .unwrap()
});

/// Stateless rule checker. Cheap to construct and safe to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardrailValidator;

impl GuardrailValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every guardrail rule; the first failing rule decides the reason.
    ///
    /// Rule order: blocklist, divine-name capitalization, works-based
    /// salvation, universalism, denial of scriptural authority.
    pub fn validate(&self, text: &str) -> ValidationResult {
        let folded = text.to_lowercase();

        if let Some(phrase) = blocked_phrase(&folded) {
            return ValidationResult::invalid(format!("Blocked phrase detected: '{phrase}'"));
        }

        if let Some(name) = divine_names::find_uncapitalized(text).into_iter().next() {
            return ValidationResult::invalid(format!(
                "Divine name '{}' must be capitalized",
                name.found
            ));
        }

        if SALVATION_RE.is_match(text) && WORKS_RE.is_match(text) {
            return ValidationResult::invalid(
                "Content presents salvation as earned through works",
            );
        }

        if UNIVERSALISM_RE.is_match(text) {
            return ValidationResult::invalid("Content presents all religions as paths to God");
        }

        if AUTHORITY_DENIAL_RE.is_match(text) {
            return ValidationResult::invalid("Content denies the authority of Scripture");
        }

        ValidationResult::valid()
    }

    /// Blocklist-only check.
    pub fn is_blocked(&self, text: &str) -> bool {
        contains_blocked_phrase(text)
    }
}

/// Whether `text` contains any [`BLOCKED_PHRASES`] entry, case-insensitively.
pub(crate) fn contains_blocked_phrase(text: &str) -> bool {
    blocked_phrase(&text.to_lowercase()).is_some()
}

fn blocked_phrase(folded: &str) -> Option<&'static str> {
    BLOCKED_PHRASES.iter().copied().find(|p| folded.contains(p))
}
