//! Place-name claims.

use shepherd_core::models::{ClaimType, Evidence, FactCheckResult, Reliability, Verdict};

use crate::dataset::places;

const ATTESTED_CONFIDENCE: f64 = 0.85;
const TRADITIONAL_CONFIDENCE: f64 = 0.65;
const UNKNOWN_PLACE_CONFIDENCE: f64 = 0.4;

pub fn verify(claim: &str, folded: &str) -> FactCheckResult {
    match places::find_in(folded) {
        Some(place) if place.archaeological_evidence => FactCheckResult::new(
            claim,
            ClaimType::Geographical,
            Verdict::Verified,
            ATTESTED_CONFIDENCE,
            Evidence::new(
                "Archaeological record",
                format!("{} in {} is attested by excavation", place.name, place.region),
                Reliability::Archaeological,
            ),
        ),
        Some(place) => FactCheckResult::new(
            claim,
            ClaimType::Geographical,
            Verdict::Plausible,
            TRADITIONAL_CONFIDENCE,
            Evidence::new(
                "Traditional identification",
                format!("The location of {} rests on tradition", place.name),
                Reliability::Traditional,
            ),
        ),
        None => FactCheckResult::new(
            claim,
            ClaimType::Geographical,
            Verdict::Plausible,
            UNKNOWN_PLACE_CONFIDENCE,
            Evidence::new(
                "Place table",
                "No place in the table is named by this claim",
                Reliability::Speculative,
            ),
        ),
    }
}
