//! Pattern-first claim classification.
//!
//! Patterns are tested in order and the first match wins. Text that matches
//! none of them is theological when it carries a doctrinal keyword or a known
//! doctrine/heresy phrase, and general otherwise.

use std::sync::LazyLock;

use regex::Regex;
use shepherd_core::models::ClaimType;

use crate::dataset::{doctrine, fold};

struct ClassPattern {
    regex: Regex,
    claim_type: ClaimType,
}

static PATTERNS: LazyLock<Vec<ClassPattern>> = LazyLock::new(|| {
    [
        (
            r"(?i)\b\d{1,4}\s*(?:bce|bc|ce|ad|b\.c\.|a\.d\.)(?:\W|$)|\b(?:ad|a\.d\.)\s*\d{1,4}\b|\b(?:century|centuries)\s+(?:bc|bce|ad|ce)\b",
            ClaimType::Dating,
        ),
        (
            r"(?i)\b(?:written|authored|penned|composed)\s+by\b|\bwrote\s+(?:the\s+)?(?:book|gospel|letter|epistle)\b|\bauthor\s+of\b",
            ClaimType::Authorship,
        ),
        (
            r"(?i)\b(?:was|is)\s+(?:a|an|the)\s+(?:\w+\s+){0,2}?(?:king|queen|prophet|prophetess|apostle|disciple|priest|high priest|judge|patriarch|leader|shepherd|fisherman|tax collector|missionary|governor|prefect|scribe|physician|warrior)\b",
            ClaimType::Person,
        ),
        (
            r"(?i)\b(?:hebrew|greek|aramaic)\s+(?:word|term)\b|\bmeans\b|\btranslated\s+(?:as|from)\b|\bliterally\b",
            ClaimType::Linguistic,
        ),
        (
            r"(?i)\b(?:located|situated|lies|lay)\s+(?:in|on|near|at|along|between|beside)\b|\b(?:north|south|east|west)\s+of\b|\b(?:city|town|village|region)\s+of\b",
            ClaimType::Geographical,
        ),
    ]
    .into_iter()
    .map(|(pattern, claim_type)| ClassPattern {
        regex: Regex::new(pattern).unwrap(),
        claim_type,
    })
    .collect()
});

static DOCTRINAL_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:salvation|trinity|resurrection|messiah)\b").unwrap());

/// Classify a single claim.
pub fn classify(text: &str) -> ClaimType {
    if let Some(p) = PATTERNS.iter().find(|p| p.regex.is_match(text)) {
        return p.claim_type;
    }
    if DOCTRINAL_KEYWORDS.is_match(text) {
        return ClaimType::Theological;
    }
    let folded = fold(text);
    if doctrine::heresy_in(&folded).is_some() || doctrine::doctrine_in(&folded).is_some() {
        return ClaimType::Theological;
    }
    ClaimType::General
}
