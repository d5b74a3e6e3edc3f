//! Authorship claims against the traditional-author table.

use shepherd_core::models::{ClaimType, Evidence, FactCheckResult, Reliability, Verdict};

use crate::dataset::{books, find_word};

const VERIFIED_CONFIDENCE: f64 = 0.9;
const DISPUTED_CONFIDENCE: f64 = 0.6;
const INCORRECT_CONFIDENCE: f64 = 0.85;
const UNKNOWN_BOOK_CONFIDENCE: f64 = 0.4;

pub fn verify(claim: &str, folded: &str) -> FactCheckResult {
    let Some((book, span)) = books::find_in(folded) else {
        return FactCheckResult::new(
            claim,
            ClaimType::Authorship,
            Verdict::Unverifiable,
            UNKNOWN_BOOK_CONFIDENCE,
            Evidence::new(
                "Authorship table",
                "No book in the authorship table is named by this claim",
                Reliability::Speculative,
            ),
        );
    };

    // The book title itself must not count as naming the author ("1 Peter").
    let mut rest = String::with_capacity(folded.len());
    rest.push_str(&folded[..span.start]);
    rest.push(' ');
    rest.push_str(&folded[span.end..]);

    let tradition = Evidence::new(
        "Church tradition",
        format!("{} is traditionally attributed to {}", book.name, book.author),
        Reliability::Traditional,
    );

    if book
        .author_aliases
        .iter()
        .any(|alias| find_word(&rest, alias).is_some())
    {
        return FactCheckResult::new(
            claim,
            ClaimType::Authorship,
            Verdict::Verified,
            VERIFIED_CONFIDENCE,
            tradition,
        );
    }

    if book.disputed {
        let mut result = FactCheckResult::new(
            claim,
            ClaimType::Authorship,
            Verdict::Disputed,
            DISPUTED_CONFIDENCE,
            tradition,
        );
        result.evidence.push(Evidence::new(
            "Modern scholarship",
            format!("Authorship of {} is debated among scholars", book.name),
            Reliability::Scholarly,
        ));
        return result;
    }

    FactCheckResult::new(
        claim,
        ClaimType::Authorship,
        Verdict::Incorrect,
        INCORRECT_CONFIDENCE,
        tradition,
    )
    .with_correction(format!(
        "{} is traditionally attributed to {}",
        book.name, book.author
    ))
}
