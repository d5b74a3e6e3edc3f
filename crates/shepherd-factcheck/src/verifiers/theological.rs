//! Doctrinal claims. Heresy phrases are checked before core doctrine.

use shepherd_core::models::{ClaimType, Evidence, FactCheckResult, Reliability, Verdict};

use crate::dataset::doctrine;

const HERESY_CONFIDENCE: f64 = 0.9;
const DOCTRINE_CONFIDENCE: f64 = 0.85;
const PLAUSIBLE_CONFIDENCE: f64 = 0.6;

pub fn verify(claim: &str, folded: &str) -> FactCheckResult {
    if let Some(phrase) = doctrine::heresy_in(folded) {
        return FactCheckResult::new(
            claim,
            ClaimType::Theological,
            Verdict::Incorrect,
            HERESY_CONFIDENCE,
            Evidence::new(
                "Historic creeds",
                format!("'{phrase}' contradicts the historic creeds"),
                Reliability::Primary,
            ),
        )
        .with_correction("Restate the claim in line with orthodox Christian teaching");
    }

    if let Some(statement) = doctrine::doctrine_in(folded) {
        return FactCheckResult::new(
            claim,
            ClaimType::Theological,
            Verdict::Verified,
            DOCTRINE_CONFIDENCE,
            Evidence::new(
                "Historic creeds",
                format!("'{statement}' is a core doctrine"),
                Reliability::Primary,
            ),
        );
    }

    FactCheckResult::new(
        claim,
        ClaimType::Theological,
        Verdict::Plausible,
        PLAUSIBLE_CONFIDENCE,
        Evidence::new(
            "Doctrine table",
            "No recognized doctrine or heresy statement matched",
            Reliability::Traditional,
        ),
    )
}
