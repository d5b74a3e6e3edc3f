//! Content shapes exchanged with the upstream provider.

use serde::{Deserialize, Serialize};

/// A scripture passage: a reference plus its text in the reader's translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub reference: String,
    pub text: String,
    pub translation: Option<String>,
}

impl Passage {
    pub fn new(reference: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
            translation: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Theological,
    Historical,
    Practical,
    Devotional,
    Linguistic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub content: String,
}

impl Insight {
    pub fn new(kind: InsightKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Text the checkers run over.
    pub fn checked_text(&self) -> String {
        format!("{}. {}", self.title, self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devotion {
    pub title: String,
    pub scripture_reference: String,
    pub body: String,
    pub prayer: String,
    pub reflection_questions: Vec<String>,
}

impl Devotion {
    pub fn checked_text(&self) -> String {
        let mut text = format!("{}. {}\n{}", self.title, self.body, self.prayer);
        for q in &self.reflection_questions {
            text.push('\n');
            text.push_str(q);
        }
        text
    }
}

/// One translation's rendering of a passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantReading {
    pub translation: String,
    pub text: String,
    pub notes: Option<String>,
}

/// Side-by-side comparison of translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub reference: String,
    pub readings: Vec<VariantReading>,
    pub key_differences: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalContext {
    pub period: String,
    pub summary: String,
    pub cultural_background: String,
    pub key_figures: Vec<String>,
    pub archaeological_notes: Option<String>,
}

impl HistoricalContext {
    pub fn checked_text(&self) -> String {
        let mut text = format!("{}\n{}\n{}", self.period, self.summary, self.cultural_background);
        if let Some(notes) = &self.archaeological_notes {
            text.push('\n');
            text.push_str(notes);
        }
        text
    }
}

/// Extra prompt guidance handed to the provider alongside each request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptHints {
    pub perspective_guidance: Option<String>,
}
