//! Scripture-reference validator: every `Book Chapter:Verse[-Verse]` token
//! that looks like a book name must name one of the 66 canonical books.
//!
//! A token is only treated as a misspelled book when its name is close to a
//! canonical one, so clock times and phrases such as "chapter 3:16" pass.

use std::sync::LazyLock;

use regex::Regex;
use shepherd_core::models::{ContentIssue, IssueKind, Severity};

use super::CheckOutcome;
use crate::books;

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:([1-3]|first|second|third|1st|2nd|3rd)\s+)?([a-z]+(?:\s+of\s+[a-z]+)?)\s+([1-9]\d{0,2}):([1-9]\d{0,2})(?:\s*-\s*([1-9]\d{0,2}))?",
    )
    .unwrap()
});

/// Names shorter than this are never reported as misspellings.
const MIN_SUSPECT_LETTERS: usize = 4;
/// Names at least this long tolerate two edits instead of one.
const LONG_NAME_LETTERS: usize = 6;

/// A reference token pulled out of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureReference {
    /// Full token as written, e.g. "1 Corinthians 13:4-7".
    pub raw: String,
    /// Book portion as written, including any leading number.
    pub book: String,
    pub chapter: u32,
    pub verse_start: u32,
    pub verse_end: Option<u32>,
}

impl ScriptureReference {
    /// The canonical book this reference names, if any.
    ///
    /// A multi-word capture such as "book of Matthew" falls back to its final
    /// word when the whole capture is not a book.
    pub fn canonical_book(&self) -> Option<&'static str> {
        books::canonical_name(&self.book).or_else(|| {
            if self.book.contains(char::is_whitespace) && !starts_with_digit(&self.book) {
                self.book
                    .split_whitespace()
                    .last()
                    .and_then(books::canonical_name)
            } else {
                None
            }
        })
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// "First", "2nd" and friends as the digit used in canonical names.
fn ordinal_digit(prefix: &str) -> &str {
    match prefix.to_ascii_lowercase().as_str() {
        "first" | "1st" => "1",
        "second" | "2nd" => "2",
        "third" | "3rd" => "3",
        _ => prefix,
    }
}

/// The canonical book an unrecognized name was probably meant to be.
///
/// Returns `None` when the name is too far from every book, in which case the
/// token is not a scripture reference at all.
fn likely_intended_book(reference: &ScriptureReference) -> Option<&'static str> {
    let mut candidates = vec![reference.book.as_str()];
    if reference.book.contains(char::is_whitespace) && !starts_with_digit(&reference.book) {
        candidates.extend(reference.book.split_whitespace().last());
    }
    candidates
        .into_iter()
        .filter_map(|name| {
            let letters = name.chars().filter(|c| c.is_alphabetic()).count();
            if letters < MIN_SUSPECT_LETTERS {
                return None;
            }
            let allowed = if letters >= LONG_NAME_LETTERS { 2 } else { 1 };
            let (book, distance) = books::nearest_with_distance(name);
            (distance <= allowed).then_some((book, distance))
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(book, _)| book)
}

/// Extract every reference-shaped token from `text`.
pub fn extract_references(text: &str) -> Vec<ScriptureReference> {
    REFERENCE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(2)?.as_str();
            let book = match caps.get(1) {
                Some(n) => format!("{} {}", ordinal_digit(n.as_str()), name),
                None => name.to_string(),
            };
            Some(ScriptureReference {
                raw: caps.get(0)?.as_str().to_string(),
                book,
                chapter: caps.get(3)?.as_str().parse().ok()?,
                verse_start: caps.get(4)?.as_str().parse().ok()?,
                verse_end: caps.get(5).and_then(|m| m.as_str().parse().ok()),
            })
        })
        .collect()
}

pub fn check(text: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for reference in extract_references(text) {
        if reference.canonical_book().is_some() {
            continue;
        }
        let Some(suggestion) = likely_intended_book(&reference) else {
            continue;
        };
        outcome.push(
            ContentIssue::new(
                IssueKind::ScriptureAccuracy,
                Severity::Minor,
                format!("Unrecognized book name '{}'", reference.book),
            )
            .at(reference.raw.clone()),
            Some(format!(
                "Did you mean '{suggestion}'? (in '{}')",
                reference.raw
            )),
        );
    }

    outcome
}
