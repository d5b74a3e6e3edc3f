use shepherd_core::constants::GENERAL_CLAIM_CONFIDENCE;
use shepherd_core::models::{ClaimType, Evidence, FactCheckResult, Reliability, Verdict};

pub fn verify(claim: &str) -> FactCheckResult {
    FactCheckResult::new(
        claim,
        ClaimType::General,
        Verdict::Unverifiable,
        GENERAL_CLAIM_CONFIDENCE,
        Evidence::new(
            "Unclassified claim",
            "The claim does not match any verifiable category",
            Reliability::Speculative,
        ),
    )
}
