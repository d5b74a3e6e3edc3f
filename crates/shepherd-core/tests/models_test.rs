use proptest::prelude::*;
use shepherd_core::models::*;

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::None),
        Just(Severity::Minor),
        Just(Severity::Moderate),
        Just(Severity::Severe),
    ]
}

fn issue_strategy() -> impl Strategy<Value = ContentIssue> {
    (0usize..IssueKind::ALL.len(), severity_strategy(), "[a-z ]{0,20}")
        .prop_map(|(k, s, d)| ContentIssue::new(IssueKind::ALL[k], s, d))
}

// ── Severity ordering ─────────────────────────────────────────────────────

#[test]
fn severity_chain_is_strictly_ascending() {
    assert!(Severity::None < Severity::Minor);
    assert!(Severity::Minor < Severity::Moderate);
    assert!(Severity::Moderate < Severity::Severe);
    assert!(Severity::ALL.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn only_moderate_and_above_block() {
    assert!(!Severity::None.blocks());
    assert!(!Severity::Minor.blocks());
    assert!(Severity::Moderate.blocks());
    assert!(Severity::Severe.blocks());
}

proptest! {
    #[test]
    fn severity_order_is_transitive(
        a in severity_strategy(),
        b in severity_strategy(),
        c in severity_strategy()
    ) {
        if a < b && b < c {
            prop_assert!(a < c);
        }
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn filter_result_approval_tracks_severity(
        issues in prop::collection::vec(issue_strategy(), 0..8)
    ) {
        let expected = issues.iter().map(|i| i.severity).max().unwrap_or(Severity::None);
        let result = FilterResult::new(issues, vec![]);
        prop_assert_eq!(result.severity(), expected);
        prop_assert_eq!(result.is_approved(), result.severity() < Severity::Moderate);
    }
}

#[test]
fn clean_filter_result_is_approved() {
    let result = FilterResult::clean();
    assert!(result.is_approved());
    assert_eq!(result.severity(), Severity::None);
    assert!(result.issues().is_empty());
}

// ── Serialization names ───────────────────────────────────────────────────

#[test]
fn issue_kind_serializes_camel_case() {
    let json = serde_json::to_string(&IssueKind::ScriptureAccuracy).unwrap();
    assert_eq!(json, "\"scriptureAccuracy\"");
    assert_eq!(IssueKind::ScriptureAccuracy.as_str(), "scriptureAccuracy");
}

#[test]
fn content_type_names_match_serde() {
    for ct in ContentType::ALL {
        let json = serde_json::to_string(&ct).unwrap();
        assert_eq!(json, format!("\"{}\"", ct.as_str()));
    }
}

// ── Fact check ────────────────────────────────────────────────────────────

#[test]
fn fact_check_result_clamps_confidence() {
    let ev = Evidence::new("test", "desc", Reliability::Speculative);
    let r = FactCheckResult::new("x", ClaimType::General, Verdict::Unverifiable, 1.7, ev);
    assert_eq!(r.confidence, 1.0);
    assert_eq!(r.evidence.len(), 1);
}

#[test]
fn fact_check_summary_counts_verdicts() {
    let ev = || Evidence::new("s", "d", Reliability::Scholarly);
    let results = vec![
        FactCheckResult::new("a", ClaimType::Authorship, Verdict::Verified, 0.9, ev()),
        FactCheckResult::new("b", ClaimType::Authorship, Verdict::Incorrect, 0.7, ev()),
        FactCheckResult::new("c", ClaimType::General, Verdict::Unverifiable, 0.5, ev()),
    ];
    let summary = FactCheckSummary::from_results(&results);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.verified, 1);
    assert_eq!(summary.incorrect, 1);
    assert_eq!(summary.unverifiable, 1);
    assert!((summary.average_confidence - 0.7).abs() < 1e-9);
}

// ── Events & alerts ───────────────────────────────────────────────────────

#[test]
fn request_events_get_unique_ids() {
    let now = chrono::Utc::now();
    let a = AiEvent::request(ContentType::Insight, now);
    let b = AiEvent::request(ContentType::Insight, now);
    assert_ne!(a.id, b.id);
    assert_eq!(a.event_type, EventType::Request);
    assert!(!a.is_response());
}

#[test]
fn default_alert_rules_are_active_and_unique() {
    let rules = AlertRule::defaults();
    assert_eq!(rules.len(), 5);
    assert!(rules.iter().all(|r| r.is_active));
    let mut ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn alert_rule_validation_bounds_the_window() {
    assert!(AlertRule::defaults().iter().all(|r| r.validate().is_ok()));
    let rule = |window| AlertRule::new("r", "R", AlertCondition::ErrorRateExceeds, 0.1, window);
    assert!(rule(0).validate().is_err());
    assert!(rule(i64::MAX).validate().is_err());
    assert!(rule(60 * 24 * 30).validate().is_ok());
    let mut nan = rule(5);
    nan.threshold = f64::NAN;
    assert!(nan.validate().is_err());
}

// ── Perspectives ──────────────────────────────────────────────────────────

#[test]
fn perspective_set_describes_in_stable_order() {
    let set = PerspectiveSet::new([
        TheologicalPerspective::Baptist,
        TheologicalPerspective::Reformed,
        TheologicalPerspective::Baptist,
    ]);
    assert_eq!(set.describe().as_deref(), Some("Reformed and Baptist"));
    assert!(set
        .prompt_hints()
        .perspective_guidance
        .unwrap()
        .contains("Reformed and Baptist"));
}

#[test]
fn empty_perspective_set_adds_nothing() {
    let set = PerspectiveSet::default();
    assert!(set.describe().is_none());
    assert!(set.fallback_note().is_none());
    assert_eq!(set.prompt_hints(), PromptHints::default());
}

#[test]
fn filter_context_historical_types_require_fact_check() {
    assert!(FilterContext::new(ContentType::HistoricalContext).requires_fact_check());
    assert!(!FilterContext::new(ContentType::Devotion).requires_fact_check());
    assert!(FilterContext::new(ContentType::Explanation)
        .with_historical_framing(true)
        .requires_fact_check());
}
