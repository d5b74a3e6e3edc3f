//! Hebrew and Greek terms with their canonical meanings.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{earliest_key, fold};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Hebrew,
    Greek,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Hebrew => "Hebrew",
            Language::Greek => "Greek",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TermRecord {
    pub key: &'static str,
    pub language: Language,
    /// Gloss used in evidence and corrections.
    pub meaning: &'static str,
    /// Lowercase keywords; any one in a claim counts as stating the meaning.
    pub keywords: &'static [&'static str],
}

const fn term(
    key: &'static str,
    language: Language,
    meaning: &'static str,
    keywords: &'static [&'static str],
) -> TermRecord {
    TermRecord {
        key,
        language,
        meaning,
        keywords,
    }
}

pub const TERMS: &[TermRecord] = &[
    term("agape", Language::Greek, "selfless, self-giving love", &["love", "selfless", "unconditional"]),
    term("logos", Language::Greek, "word, reason", &["word", "reason", "speech"]),
    term("ekklesia", Language::Greek, "assembly, those called out", &["assembly", "church", "called out", "congregation"]),
    term("euangelion", Language::Greek, "good news", &["good news", "gospel"]),
    term("pneuma", Language::Greek, "spirit, breath, wind", &["spirit", "breath", "wind"]),
    term("christos", Language::Greek, "anointed one", &["anointed"]),
    term("koinonia", Language::Greek, "fellowship, communion", &["fellowship", "communion", "sharing", "partnership"]),
    term("shalom", Language::Hebrew, "peace, wholeness", &["peace", "wholeness", "completeness", "well-being"]),
    term("hesed", Language::Hebrew, "steadfast love, covenant loyalty", &["steadfast love", "lovingkindness", "loyalty", "mercy", "faithful love"]),
    term("torah", Language::Hebrew, "instruction, law", &["instruction", "law", "teaching"]),
    term("ruach", Language::Hebrew, "spirit, breath, wind", &["spirit", "breath", "wind"]),
    term("messiah", Language::Hebrew, "anointed one", &["anointed"]),
    term("hallelujah", Language::Hebrew, "praise the Lord", &["praise"]),
    term("amen", Language::Hebrew, "so be it, truly", &["so be it", "truly", "certainly", "surely"]),
    term("immanuel", Language::Hebrew, "God with us", &["god with us"]),
    term("emmanuel", Language::Hebrew, "God with us", &["god with us"]),
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static TermRecord>> =
    LazyLock::new(|| TERMS.iter().map(|t| (t.key, t)).collect());

pub fn lookup(term: &str) -> Option<&'static TermRecord> {
    BY_KEY.get(fold(term).as_str()).copied()
}

/// The first known term in already-folded text.
pub fn find_in(folded: &str) -> Option<&'static TermRecord> {
    let (_, key) = earliest_key(folded, BY_KEY.keys().copied())?;
    BY_KEY.get(key).copied()
}
