//! Capitalization convention for divine names.
//!
//! A divine-name token written with a lowercase initial is a violation unless
//! the word right before it is "a" or "the", which marks generic use
//! ("a god of wood", "the father of the bride").

/// Names checked case-insensitively. "holy spirit" spans two words.
pub const DIVINE_NAMES: &[&str] = &[
    "god",
    "lord",
    "jesus",
    "christ",
    "holy spirit",
    "father",
    "son",
    "savior",
    "messiah",
    "yahweh",
];

const GENERIC_ARTICLES: &[&str] = &["a", "the"];

/// A divine name found without initial capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncapitalizedName {
    /// Canonical lowercase entry from [`DIVINE_NAMES`].
    pub name: &'static str,
    /// The text as written.
    pub found: String,
    /// Byte offset of the first word.
    pub offset: usize,
}

/// Split into alphanumeric words with their byte offsets.
fn words(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            out.push((s, &text[s..i]));
        }
    }
    if let Some(s) = start {
        out.push((s, &text[s..]));
    }
    out
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_generic_article(word: &str) -> bool {
    GENERIC_ARTICLES
        .iter()
        .any(|a| a.eq_ignore_ascii_case(word))
}

/// Find every divine name written without initial capitalization.
pub fn find_uncapitalized(text: &str) -> Vec<UncapitalizedName> {
    let words = words(text);
    let mut found = Vec::new();

    for (i, &(offset, word)) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        let spirit_follows = words
            .get(i + 1)
            .is_some_and(|(_, next)| next.eq_ignore_ascii_case("spirit"));

        let (name, written) = if lower == "holy" && spirit_follows {
            let (next_offset, next) = words[i + 1];
            ("holy spirit", &text[offset..next_offset + next.len()])
        } else if let Some(name) = DIVINE_NAMES
            .iter()
            .find(|n| !n.contains(' ') && **n == lower)
        {
            (*name, word)
        } else {
            continue;
        };

        if starts_uppercase(word) {
            continue;
        }
        if i > 0 && is_generic_article(words[i - 1].1) {
            continue;
        }

        found.push(UncapitalizedName {
            name,
            found: written.to_string(),
            offset,
        });
    }

    found
}

/// Title-case a divine name for suggestions ("holy spirit" → "Holy Spirit").
pub fn capitalized(name: &str) -> String {
    name.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
