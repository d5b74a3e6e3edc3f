//! # shepherd-fallback
//!
//! Deterministic, always-available replacement content. Every entry here has
//! been written to pass the guardrail and the content filter, so substituting
//! it can never itself trigger another substitution.

mod library;

use shepherd_core::models::{
    ContentType, Devotion, HistoricalContext, Insight, Passage, PerspectiveSet,
};

/// Immutable, shareable pool of vetted replacement content.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackContentPool;

impl FallbackContentPool {
    pub fn new() -> Self {
        Self
    }

    /// Plain-text fallback for a content type.
    pub fn text(&self, content_type: ContentType) -> &'static str {
        match content_type {
            ContentType::Insight => library::INSIGHTS[0].2,
            ContentType::Devotion => library::DEVOTION_BODY,
            ContentType::Explanation => library::EXPLANATION,
            ContentType::TranslationComparison => library::RECOMMENDATIONS[0],
            ContentType::HistoricalContext => library::HISTORICAL_SUMMARY,
            ContentType::General => library::FREEFORM,
        }
    }

    /// The full fallback insight set, one per insight kind.
    pub fn insights(&self) -> Vec<Insight> {
        (0..library::INSIGHTS.len()).map(|i| self.insight(i)).collect()
    }

    /// Replacement for the insight at `index` of a generated list.
    pub fn insight(&self, index: usize) -> Insight {
        let (kind, title, content) = library::INSIGHTS[index % library::INSIGHTS.len()];
        Insight::new(kind, title, content)
    }

    pub fn devotion(&self, passage: &Passage, perspectives: &PerspectiveSet) -> Devotion {
        Devotion {
            title: library::DEVOTION_TITLE.to_string(),
            scripture_reference: passage.reference.clone(),
            body: with_note(library::DEVOTION_BODY, perspectives),
            prayer: library::DEVOTION_PRAYER.to_string(),
            reflection_questions: library::REFLECTION_QUESTIONS
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }

    pub fn explanation(&self, perspectives: &PerspectiveSet) -> String {
        with_note(library::EXPLANATION, perspectives)
    }

    /// Replacement for the translation recommendation at `index`.
    pub fn recommendation(&self, index: usize) -> String {
        library::RECOMMENDATIONS[index % library::RECOMMENDATIONS.len()].to_string()
    }

    pub fn historical_context(&self) -> HistoricalContext {
        HistoricalContext {
            period: library::HISTORICAL_PERIOD.to_string(),
            summary: library::HISTORICAL_SUMMARY.to_string(),
            cultural_background: library::HISTORICAL_BACKGROUND.to_string(),
            key_figures: Vec::new(),
            archaeological_notes: None,
        }
    }

    pub fn freeform(&self) -> String {
        library::FREEFORM.to_string()
    }
}

fn with_note(body: &str, perspectives: &PerspectiveSet) -> String {
    match perspectives.fallback_note() {
        Some(note) => format!("{body}\n\n{note}"),
        None => body.to_string(),
    }
}
