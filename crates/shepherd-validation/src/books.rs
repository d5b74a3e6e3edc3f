//! The 66 canonical book names and case-insensitive lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const CANONICAL_BOOKS: [&str; 66] = [
    // Old Testament
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    // New Testament
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Accepted alternate spellings, mapped to their canonical name.
const ALIASES: &[(&str, &str)] = &[
    ("psalm", "Psalms"),
    ("song of songs", "Song of Solomon"),
];

/// Lowercased, whitespace-normalized name → canonical name.
static LOOKUP: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map: HashMap<String, &'static str> = CANONICAL_BOOKS
        .iter()
        .map(|b| (b.to_lowercase(), *b))
        .collect();
    for (alias, canonical) in ALIASES {
        map.insert((*alias).to_string(), canonical);
    }
    map
});

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve a book name case-insensitively to its canonical spelling.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    LOOKUP.get(&normalize(name)).copied()
}

pub fn is_canonical(name: &str) -> bool {
    canonical_name(name).is_some()
}

/// The canonical book closest to `name` by edit distance.
pub fn nearest(name: &str) -> &'static str {
    nearest_with_distance(name).0
}

/// The closest canonical book together with its edit distance from `name`.
pub fn nearest_with_distance(name: &str) -> (&'static str, usize) {
    let target = normalize(name);
    CANONICAL_BOOKS
        .iter()
        .map(|b| (*b, levenshtein(&target, &b.to_lowercase())))
        .min_by_key(|(_, distance)| *distance)
        .unwrap_or((CANONICAL_BOOKS[0], usize::MAX))
}

/// Simple Levenshtein distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
