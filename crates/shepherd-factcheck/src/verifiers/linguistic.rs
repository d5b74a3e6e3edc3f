//! Hebrew/Greek term meanings.

use shepherd_core::models::{ClaimType, Evidence, FactCheckResult, Reliability, Verdict};

use crate::dataset::{find_word, lexicon};

const VERIFIED_CONFIDENCE: f64 = 0.85;
const PLAUSIBLE_CONFIDENCE: f64 = 0.6;
const UNKNOWN_TERM_CONFIDENCE: f64 = 0.4;

pub fn verify(claim: &str, folded: &str) -> FactCheckResult {
    let Some(term) = lexicon::find_in(folded) else {
        return FactCheckResult::new(
            claim,
            ClaimType::Linguistic,
            Verdict::Plausible,
            UNKNOWN_TERM_CONFIDENCE,
            Evidence::new(
                "Lexicon",
                "The term is not in the curated lexicon",
                Reliability::Speculative,
            ),
        );
    };

    let evidence = Evidence::new(
        format!("{} lexicon", term.language.as_str()),
        format!("'{}' means {}", term.key, term.meaning),
        Reliability::Scholarly,
    );

    let states_meaning = term
        .keywords
        .iter()
        .any(|k| find_word(folded, k).is_some());
    if states_meaning {
        FactCheckResult::new(
            claim,
            ClaimType::Linguistic,
            Verdict::Verified,
            VERIFIED_CONFIDENCE,
            evidence,
        )
    } else {
        FactCheckResult::new(
            claim,
            ClaimType::Linguistic,
            Verdict::Plausible,
            PLAUSIBLE_CONFIDENCE,
            evidence,
        )
    }
}
