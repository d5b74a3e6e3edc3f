//! Claims about a biblical figure's role.

use shepherd_core::models::{ClaimType, Evidence, FactCheckResult, Reliability, Verdict};

use crate::dataset::{find_word, persons};

const VERIFIED_CONFIDENCE: f64 = 0.9;
const INCORRECT_CONFIDENCE: f64 = 0.7;
const UNKNOWN_PERSON_CONFIDENCE: f64 = 0.3;

pub fn verify(claim: &str, folded: &str) -> FactCheckResult {
    let Some(person) = persons::find_in(folded) else {
        return FactCheckResult::new(
            claim,
            ClaimType::Person,
            Verdict::Unverifiable,
            UNKNOWN_PERSON_CONFIDENCE,
            Evidence::new(
                "Person table",
                "No figure in the person table is named by this claim",
                Reliability::Speculative,
            ),
        );
    };

    let roles = person.roles.join(", ");
    let evidence = Evidence::new(
        "Biblical narrative",
        format!("{} is known as: {roles}", person.name),
        Reliability::Primary,
    );

    if person.roles.iter().any(|r| find_word(folded, r).is_some()) {
        FactCheckResult::new(
            claim,
            ClaimType::Person,
            Verdict::Verified,
            VERIFIED_CONFIDENCE,
            evidence,
        )
    } else {
        FactCheckResult::new(
            claim,
            ClaimType::Person,
            Verdict::Incorrect,
            INCORRECT_CONFIDENCE,
            evidence,
        )
        .with_correction(format!("{} is known as: {roles}", person.name))
    }
}
