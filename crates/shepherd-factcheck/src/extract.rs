//! Candidate-claim extraction: sentences carrying an assertion verb.

use std::sync::LazyLock;

use regex::Regex;

// Era and Latin abbreviations are consumed whole so their periods never end a
// sentence.
static SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b(?i:a\.d\.|b\.c\.e\.|b\.c\.|c\.e\.|e\.g\.|i\.e\.)|[^.!?])+[.!?]*").unwrap()
});

static ASSERTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:was|is|were|are|written|wrote|means|meant|located|happened|occurred|born|died|lived)\b",
    )
    .unwrap()
});

/// Split `text` into trimmed sentences that contain an assertion verb.
pub fn candidate_claims(text: &str) -> Vec<&str> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty() && ASSERTION_RE.is_match(s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_assertions() {
        let claims = candidate_claims(
            "Romans was written by Paul. Read it slowly! Bethlehem is located in Judea?",
        );
        assert_eq!(
            claims,
            vec!["Romans was written by Paul.", "Bethlehem is located in Judea?"]
        );
    }

    #[test]
    fn era_abbreviations_do_not_split_sentences() {
        assert_eq!(
            candidate_claims("Romans was written around A.D. 57 by Peter. Pray daily."),
            vec!["Romans was written around A.D. 57 by Peter."]
        );
        assert_eq!(
            candidate_claims("Romans was written by Paul around 57 A.D. Bethlehem is located in Judea."),
            vec!["Romans was written by Paul around 57 A.D.", "Bethlehem is located in Judea."]
        );
        assert_eq!(
            candidate_claims("Jerusalem was taken in 586 B.C.E. by Babylon. David was born around 1040 B.C. in Bethlehem."),
            vec![
                "Jerusalem was taken in 586 B.C.E. by Babylon.",
                "David was born around 1040 B.C. in Bethlehem.",
            ]
        );
    }

    #[test]
    fn lowercase_era_marks_stay_attached() {
        assert_eq!(
            candidate_claims("The temple was rebuilt in 516 b.c. after the exile."),
            vec!["The temple was rebuilt in 516 b.c. after the exile."]
        );
    }

    #[test]
    fn empty_text_has_no_claims() {
        assert!(candidate_claims("").is_empty());
        assert!(candidate_claims("   ...  ").is_empty());
    }
}
