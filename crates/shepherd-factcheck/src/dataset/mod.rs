//! Curated lookup tables. Keys are lowercase; every lookup folds its input
//! with [`fold`] first.

pub mod books;
pub mod doctrine;
pub mod lexicon;
pub mod persons;
pub mod places;

/// Lowercase and collapse runs of whitespace.
pub fn fold(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Byte offset of the first whole-word occurrence of `needle` in `haystack`.
/// Both arguments must already be folded.
pub fn find_word(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let is_boundary = |c: Option<char>| c.map_or(true, |c| !c.is_alphanumeric());
    haystack.match_indices(needle).map(|(i, _)| i).find(|&i| {
        let before = haystack[..i].chars().next_back();
        let after = haystack[i + needle.len()..].chars().next();
        is_boundary(before) && is_boundary(after)
    })
}

/// Earliest whole-word key from `keys` present in `haystack`; ties go to the
/// longer key so "john the baptist" beats "john".
pub fn earliest_key<'a, I>(haystack: &str, keys: I) -> Option<(usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter()
        .filter_map(|k| find_word(haystack, k).map(|pos| (pos, k)))
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.len().cmp(&a.1.len())))
}
