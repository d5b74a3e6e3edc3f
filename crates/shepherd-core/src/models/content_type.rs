use serde::{Deserialize, Serialize};

/// The generation use case a piece of content belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Insight,
    Devotion,
    Explanation,
    TranslationComparison,
    HistoricalContext,
    General,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::Insight,
        ContentType::Devotion,
        ContentType::Explanation,
        ContentType::TranslationComparison,
        ContentType::HistoricalContext,
        ContentType::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Insight => "insight",
            ContentType::Devotion => "devotion",
            ContentType::Explanation => "explanation",
            ContentType::TranslationComparison => "translationComparison",
            ContentType::HistoricalContext => "historicalContext",
            ContentType::General => "general",
        }
    }

    /// Content whose semantic type is historical always gets fact-checked.
    pub fn is_historical(self) -> bool {
        matches!(self, ContentType::HistoricalContext)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
