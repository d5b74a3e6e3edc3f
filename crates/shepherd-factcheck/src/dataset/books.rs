//! Book authorship and dating table.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{earliest_key, fold};

/// Traditional authorship and dating for one book.
#[derive(Debug, Clone, Copy)]
pub struct BookRecord {
    /// Lowercase lookup key.
    pub key: &'static str,
    pub name: &'static str,
    pub author: &'static str,
    /// Lowercase names that count as naming the traditional author.
    pub author_aliases: &'static [&'static str],
    pub date_range: &'static str,
    /// Authorship is contested in mainstream scholarship.
    pub disputed: bool,
}

const fn book(
    key: &'static str,
    name: &'static str,
    author: &'static str,
    author_aliases: &'static [&'static str],
    date_range: &'static str,
    disputed: bool,
) -> BookRecord {
    BookRecord {
        key,
        name,
        author,
        author_aliases,
        date_range,
        disputed,
    }
}

const MOSES: &[&str] = &["moses"];
const PAUL: &[&str] = &["paul", "the apostle paul", "saul of tarsus"];
const SOLOMON: &[&str] = &["solomon", "king solomon"];
const JOHN: &[&str] = &["john", "the apostle john", "john the apostle"];
const LUKE: &[&str] = &["luke", "luke the physician"];
const PETER: &[&str] = &["peter", "simon peter", "the apostle peter"];

pub const BOOKS: &[BookRecord] = &[
    book("genesis", "Genesis", "Moses", MOSES, "c. 1445–1405 BC", false),
    book("exodus", "Exodus", "Moses", MOSES, "c. 1445–1405 BC", false),
    book("leviticus", "Leviticus", "Moses", MOSES, "c. 1445–1405 BC", false),
    book("numbers", "Numbers", "Moses", MOSES, "c. 1445–1405 BC", false),
    book("deuteronomy", "Deuteronomy", "Moses", MOSES, "c. 1405 BC", false),
    book("joshua", "Joshua", "Joshua", &["joshua"], "c. 1400–1370 BC", false),
    book("psalms", "Psalms", "David and others", &["david"], "c. 1440–450 BC", true),
    book("proverbs", "Proverbs", "Solomon", SOLOMON, "c. 950–700 BC", false),
    book("ecclesiastes", "Ecclesiastes", "Solomon", SOLOMON, "c. 935 BC", true),
    book("isaiah", "Isaiah", "Isaiah", &["isaiah"], "c. 740–680 BC", true),
    book("jeremiah", "Jeremiah", "Jeremiah", &["jeremiah", "baruch"], "c. 627–580 BC", false),
    book("daniel", "Daniel", "Daniel", &["daniel"], "c. 605–530 BC", true),
    book("matthew", "Matthew", "Matthew", &["matthew", "levi"], "c. AD 50–70", false),
    book("mark", "Mark", "Mark", &["mark", "john mark"], "c. AD 55–65", false),
    book("luke", "Luke", "Luke", LUKE, "c. AD 60–62", false),
    book("john", "John", "John", JOHN, "c. AD 85–95", false),
    book("acts", "Acts", "Luke", LUKE, "c. AD 62", false),
    book("romans", "Romans", "Paul", PAUL, "c. AD 57", false),
    book("1 corinthians", "1 Corinthians", "Paul", PAUL, "c. AD 55", false),
    book("2 corinthians", "2 Corinthians", "Paul", PAUL, "c. AD 56", false),
    book("galatians", "Galatians", "Paul", PAUL, "c. AD 48–55", false),
    book("ephesians", "Ephesians", "Paul", PAUL, "c. AD 60–62", false),
    book("philippians", "Philippians", "Paul", PAUL, "c. AD 61", false),
    book("colossians", "Colossians", "Paul", PAUL, "c. AD 60–62", false),
    book("1 timothy", "1 Timothy", "Paul", PAUL, "c. AD 62–64", true),
    book("2 timothy", "2 Timothy", "Paul", PAUL, "c. AD 64–67", true),
    book("hebrews", "Hebrews", "an unknown author", &[], "c. AD 60–70", true),
    book("james", "James", "James", &["james", "james the brother of jesus"], "c. AD 45–50", false),
    book("1 peter", "1 Peter", "Peter", PETER, "c. AD 62–64", false),
    book("2 peter", "2 Peter", "Peter", PETER, "c. AD 64–67", true),
    book("revelation", "Revelation", "John", JOHN, "c. AD 95", false),
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static BookRecord>> =
    LazyLock::new(|| BOOKS.iter().map(|b| (b.key, b)).collect());

/// Case-insensitive lookup by book name.
pub fn lookup(name: &str) -> Option<&'static BookRecord> {
    BY_KEY.get(fold(name).as_str()).copied()
}

/// The first book named in already-folded text, with its byte span.
pub fn find_in(folded: &str) -> Option<(&'static BookRecord, std::ops::Range<usize>)> {
    let (pos, key) = earliest_key(folded, BY_KEY.keys().copied())?;
    let record = BY_KEY.get(key).copied()?;
    Some((record, pos..pos + key.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("ROMANS").map(|b| b.author), Some("Paul"));
        assert_eq!(lookup("1  corinthians").map(|b| b.name), Some("1 Corinthians"));
        assert!(lookup("Hezekiah").is_none());
    }

    #[test]
    fn find_in_reports_span() {
        let (record, span) = find_in("was 1 peter written by paul").unwrap();
        assert_eq!(record.name, "1 Peter");
        assert_eq!(span, 4..11);
    }

    #[test]
    fn keys_are_unique_and_folded() {
        assert_eq!(BY_KEY.len(), BOOKS.len());
        for b in BOOKS {
            assert_eq!(fold(b.key), b.key);
        }
    }
}
