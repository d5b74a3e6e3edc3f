//! Every fallback entry must survive the same checks generated content faces.

use proptest::prelude::*;
use shepherd_core::models::{
    ContentType, FilterContext, Passage, PerspectiveSet, TheologicalPerspective,
};
use shepherd_fallback::FallbackContentPool;
use shepherd_validation::{ContentFilter, GuardrailValidator};

fn assert_passes(label: &str, text: &str) {
    let guardrail = GuardrailValidator::new().validate(text);
    assert!(guardrail.is_valid, "{label}: guardrail rejected {text:?}: {guardrail:?}");

    let ctx = FilterContext::new(ContentType::General).with_scripture_references(true);
    let filtered = ContentFilter::new().filter(text, &ctx);
    assert!(
        filtered.issues().is_empty(),
        "{label}: filter flagged {text:?}: {:?}",
        filtered.issues()
    );
}

fn perspectives() -> PerspectiveSet {
    PerspectiveSet::new([TheologicalPerspective::Reformed, TheologicalPerspective::Baptist])
}

#[test]
fn every_text_entry_passes() {
    let pool = FallbackContentPool::new();
    for ct in ContentType::ALL {
        let text = pool.text(ct);
        assert!(!text.is_empty());
        assert_passes(ct.as_str(), text);
    }
}

#[test]
fn insights_pass_and_cover_every_kind() {
    let pool = FallbackContentPool::new();
    let insights = pool.insights();
    assert_eq!(insights.len(), 5);
    for insight in &insights {
        assert_passes(&insight.title, &insight.checked_text());
    }
}

#[test]
fn devotion_passes_with_and_without_perspectives() {
    let pool = FallbackContentPool::new();
    let passage = Passage::new("John 3:16", "For God so loved the world...");
    for set in [PerspectiveSet::default(), perspectives()] {
        let devotion = pool.devotion(&passage, &set);
        assert_eq!(devotion.scripture_reference, "John 3:16");
        assert_passes("devotion", &devotion.checked_text());
    }
}

#[test]
fn perspective_note_changes_wording_only() {
    let pool = FallbackContentPool::new();
    let plain = pool.explanation(&PerspectiveSet::default());
    let noted = pool.explanation(&perspectives());
    assert!(noted.starts_with(&plain));
    assert!(noted.contains("Reformed and Baptist"));
    assert_passes("explanation", &noted);
}

#[test]
fn historical_context_and_freeform_pass() {
    let pool = FallbackContentPool::new();
    assert_passes("historical", &pool.historical_context().checked_text());
    assert_passes("freeform", &pool.freeform());
    for i in 0..3 {
        assert_passes("recommendation", &pool.recommendation(i));
    }
}

proptest! {
    #[test]
    fn indexed_entries_are_deterministic(index in 0usize..10_000) {
        let pool = FallbackContentPool::new();
        prop_assert_eq!(pool.insight(index), pool.insight(index));
        prop_assert_eq!(pool.recommendation(index), pool.recommendation(index));
        prop_assert!(!pool.recommendation(index).is_empty());
    }
}
