//! Per-type verifiers. Each takes the claim as written and its folded form.

pub mod authorship;
pub mod dating;
pub mod general;
pub mod geographical;
pub mod linguistic;
pub mod person;
pub mod theological;

use shepherd_core::models::{ClaimType, FactCheckResult};

use crate::dataset::fold;

/// Route a classified claim to its verifier.
pub fn dispatch(claim_type: ClaimType, claim: &str) -> FactCheckResult {
    let folded = fold(claim);
    match claim_type {
        ClaimType::Dating => dating::verify(claim, &folded),
        ClaimType::Authorship => authorship::verify(claim, &folded),
        ClaimType::Person => person::verify(claim, &folded),
        ClaimType::Linguistic => linguistic::verify(claim, &folded),
        ClaimType::Geographical => geographical::verify(claim, &folded),
        ClaimType::Theological => theological::verify(claim, &folded),
        ClaimType::General => general::verify(claim),
    }
}
