//! ClaimFactChecker tests: classification order, per-type verdicts, evidence.

use proptest::prelude::*;
use shepherd_core::config::FactCheckConfig;
use shepherd_core::models::{ClaimType, FactCheckResult, Reliability, Verdict};
use shepherd_factcheck::ClaimFactChecker;
use test_fixtures::claim_cases;

fn verdict_name(v: Verdict) -> &'static str {
    match v {
        Verdict::Verified => "verified",
        Verdict::Plausible => "plausible",
        Verdict::Disputed => "disputed",
        Verdict::Incorrect => "incorrect",
        Verdict::Unverifiable => "unverifiable",
    }
}

#[test]
fn golden_claim_cases() {
    let checker = ClaimFactChecker::default();
    for case in claim_cases() {
        let result = checker.check_claim(&case.claim);
        assert_eq!(
            result.claim_type.as_str(),
            case.claim_type,
            "Case '{}': classification mismatch",
            case.id
        );
        assert_eq!(
            verdict_name(result.verdict),
            case.verdict,
            "Case '{}': verdict mismatch, evidence {:?}",
            case.id,
            result.evidence
        );
        if let Some(expected) = case.confidence {
            assert!(
                (result.confidence - expected).abs() < 1e-9,
                "Case '{}': confidence {} != {}",
                case.id,
                result.confidence,
                expected
            );
        }
        if let Some(expected) = &case.correction_contains {
            assert!(
                result.corrections.iter().any(|c| c.contains(expected.as_str())),
                "Case '{}': corrections {:?} should mention {:?}",
                case.id,
                result.corrections,
                expected
            );
        }
        assert!(!result.evidence.is_empty(), "Case '{}': no evidence", case.id);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────

#[test]
fn genesis_dating_is_plausible_at_fixed_confidence() {
    let result = ClaimFactChecker::default().check_claim("Genesis was written around 1400 bc");
    assert_eq!(result.claim_type, ClaimType::Dating);
    assert_eq!(result.verdict, Verdict::Plausible);
    assert_eq!(result.confidence, 0.75);
}

#[test]
fn dating_does_not_compare_years() {
    let checker = ClaimFactChecker::default();
    let early = checker.check_claim("Genesis was written around 1400 bc");
    let late = checker.check_claim("Genesis was written around 200 bc");
    assert_eq!(early.verdict, late.verdict);
    assert_eq!(early.confidence, late.confidence);
}

#[test]
fn authorship_verified_and_incorrect() {
    let checker = ClaimFactChecker::default();
    assert_eq!(checker.check_claim("Romans written by Paul").verdict, Verdict::Verified);

    let wrong = checker.check_claim("Romans written by Peter");
    assert_eq!(wrong.verdict, Verdict::Incorrect);
    assert!(wrong.corrections.iter().any(|c| c.contains("Paul")));
}

#[test]
fn authorship_accepts_author_aliases() {
    let checker = ClaimFactChecker::default();
    let result = checker.check_claim("Galatians was written by Saul of Tarsus");
    assert_eq!(result.verdict, Verdict::Verified);
}

#[test]
fn lookups_ignore_case() {
    let checker = ClaimFactChecker::default();
    assert_eq!(checker.check_claim("ROMANS WRITTEN BY PAUL").verdict, Verdict::Verified);
    assert_eq!(checker.check_claim("romans written by paul").verdict, Verdict::Verified);
}

#[test]
fn geographical_evidence_tier_follows_archaeology() {
    let checker = ClaimFactChecker::default();
    let attested = checker.check_claim("Capernaum lies on the Sea of Galilee");
    assert_eq!(attested.verdict, Verdict::Verified);
    assert_eq!(attested.evidence[0].reliability, Reliability::Archaeological);

    let traditional = checker.check_claim("Emmaus lies near Jerusalem");
    // Earliest place named wins: Emmaus has no archaeological attestation.
    assert_eq!(traditional.verdict, Verdict::Plausible);
    assert_eq!(traditional.evidence[0].reliability, Reliability::Traditional);
}

#[test]
fn heresy_is_checked_before_doctrine() {
    let result = ClaimFactChecker::default()
        .check_claim("Jesus was created, though the resurrection of Jesus is affirmed");
    assert_eq!(result.verdict, Verdict::Incorrect);
}

#[test]
fn unmatched_theology_is_plausible() {
    let result = ClaimFactChecker::default().check_claim("The trinity is a mystery");
    assert_eq!(result.claim_type, ClaimType::Theological);
    assert_eq!(result.verdict, Verdict::Plausible);
}

// ── Content extraction ────────────────────────────────────────────────────

#[test]
fn validate_content_checks_each_assertion() {
    let results = ClaimFactChecker::default().validate_content(
        "Romans was written by Peter. Pray daily! Bethlehem is located in Judea.",
    );
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].verdict, Verdict::Incorrect);
    assert_eq!(results[1].verdict, Verdict::Verified);
}

#[test]
fn validate_content_keeps_era_dates_inside_one_claim() {
    let results = ClaimFactChecker::default().validate_content(
        "Romans was written around A.D. 57 by Peter. Genesis was written around 1400 B.C. in the wilderness.",
    );
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].claim, "Romans was written around A.D. 57 by Peter.");
    assert_eq!(results[1].claim, "Genesis was written around 1400 B.C. in the wilderness.");
    for result in &results {
        assert_eq!(result.claim_type, ClaimType::Dating);
        assert_eq!(result.verdict, Verdict::Plausible);
    }
}

#[test]
fn validate_content_handles_trailing_era_marker() {
    let results = ClaimFactChecker::default()
        .validate_content("Romans was written by Paul around 57 A.D. Pray daily.");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].claim, "Romans was written by Paul around 57 A.D.");
    assert_eq!(results[0].claim_type, ClaimType::Dating);
}

#[test]
fn validate_content_respects_claim_limit() {
    let checker = ClaimFactChecker::new(FactCheckConfig {
        max_claims_per_passage: 2,
        ..Default::default()
    });
    let results = checker.validate_content("It is one. It is two. It is three.");
    assert_eq!(results.len(), 2);
}

#[test]
fn summary_counts_verdicts() {
    let checker = ClaimFactChecker::default();
    let results = checker.validate_content(
        "Romans was written by Paul. Romans was written by Peter. The weather was mild.",
    );
    let summary = checker.summarize(&results);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.verified, 1);
    assert_eq!(summary.incorrect, 1);
    assert_eq!(summary.unverifiable, 1);
}

// ── Blocking decision ─────────────────────────────────────────────────────

#[test]
fn single_incorrect_claim_blocks_regardless_of_confidence() {
    let checker = ClaimFactChecker::default();
    let results = vec![checker.check_claim("Moses was a tax collector")];
    assert!(results[0].confidence < checker.config().high_confidence_threshold);
    assert!(checker.blocking_error(&results).is_some());
}

#[test]
fn broad_passage_blocks_only_on_high_confidence() {
    let checker = ClaimFactChecker::default();
    let low = checker.validate_content("Moses was a tax collector. David was a king.");
    assert!(checker.blocking_error(&low).is_none());

    let high = checker.validate_content("Romans was written by Peter. David was a king.");
    let blocking: &FactCheckResult = checker.blocking_error(&high).unwrap();
    assert!(blocking.claim.starts_with("Romans"));
}

// ── Invariants ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_result_has_evidence_and_bounded_confidence(text in "[A-Za-z0-9 ]{1,60}") {
        let result = ClaimFactChecker::default().check_claim(&text);
        prop_assert!(!result.evidence.is_empty());
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn check_claim_is_deterministic(text in "[A-Za-z0-9 ]{1,60}") {
        let checker = ClaimFactChecker::default();
        prop_assert_eq!(checker.check_claim(&text), checker.check_claim(&text));
    }
}
