//! Dating claims. The claimed year is not compared against the stored range;
//! a recognized book yields `plausible` at a fixed confidence.

use shepherd_core::constants::{DATING_CLAIM_CONFIDENCE, GENERAL_CLAIM_CONFIDENCE};
use shepherd_core::models::{ClaimType, Evidence, FactCheckResult, Reliability, Verdict};

use crate::dataset::books;

pub fn verify(claim: &str, folded: &str) -> FactCheckResult {
    match books::find_in(folded) {
        Some((book, _)) => FactCheckResult::new(
            claim,
            ClaimType::Dating,
            Verdict::Plausible,
            DATING_CLAIM_CONFIDENCE,
            Evidence::new(
                "Scholarly dating",
                format!("{} is commonly dated {}", book.name, book.date_range),
                Reliability::Scholarly,
            ),
        ),
        None => FactCheckResult::new(
            claim,
            ClaimType::Dating,
            Verdict::Unverifiable,
            GENERAL_CLAIM_CONFIDENCE,
            Evidence::new(
                "Dating table",
                "No book in the dating table is named by this claim",
                Reliability::Speculative,
            ),
        ),
    }
}
