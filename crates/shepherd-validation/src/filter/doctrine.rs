//! Theological-doctrine checker: fixed list of doctrine-violation predicates.

use regex::Regex;
use shepherd_core::models::{ContentIssue, IssueKind, Severity};
use std::sync::LazyLock;

use super::CheckOutcome;

macro_rules! doctrine_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

doctrine_pattern!(
    RE_DEITY_DENIAL,
    r"(?i)\bjesus\s+(?:was|is)\s+(?:just|only|merely|simply)\s+(?:a|an)\s+(?:good\s+)?(?:man|human|prophet|teacher|rabbi)\b|\bjesus\s+(?:was|is)\s+not\s+(?:god|divine|the\s+son\s+of\s+god)\b|\bjesus\s+(?:was|is)\s+(?:a\s+)?created\b"
);

doctrine_pattern!(
    RE_WORKS_SALVATION,
    r"(?i)\b(?:saved|salvation)\b[^.!?]{0,40}?\b(?:by|through)\s+(?:our\s+|your\s+|their\s+)?(?:good\s+)?(?:works|deeds)\b|\bearn(?:s|ed|ing)?\s+(?:your|our|their|his|her)?\s*(?:own\s+)?(?:salvation|way\s+to\s+heaven|place\s+in\s+heaven)\b"
);

doctrine_pattern!(
    RE_SCRIPTURAL_ERROR,
    r"(?i)\b(?:bible|scriptures?)\s+(?:has|contains|is\s+full\s+of)\s+(?:many\s+)?errors\b|\b(?:bible|scriptures?)\s+(?:is|are)\s+wrong\b"
);

doctrine_pattern!(
    RE_UNIVERSALISM,
    r"(?i)\ball\s+(?:paths|religions|faiths)\s+lead\s+to\s+god\b|\ball\s+religions\s+are\s+(?:equally\s+)?(?:true|valid)\b|\bevery\s+religion\s+leads\s+to\s+god\b"
);

/// A doctrine-violation predicate.
pub struct DoctrinePredicate {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub severity: Severity,
    pub description: &'static str,
    pub suggestion: &'static str,
    /// Matches whose text contains a negation ("not by works") are ignored.
    pub skip_negated: bool,
}

pub fn all_predicates() -> &'static [DoctrinePredicate] {
    static PREDICATES: [DoctrinePredicate; 4] = [
        DoctrinePredicate {
            name: "deity_denial",
            regex: &RE_DEITY_DENIAL,
            severity: Severity::Severe,
            description: "Denies the deity of Christ",
            suggestion: "Affirm that Jesus is fully God and fully man",
            skip_negated: false,
        },
        DoctrinePredicate {
            name: "works_salvation",
            regex: &RE_WORKS_SALVATION,
            severity: Severity::Moderate,
            description: "Presents salvation as earned by works",
            suggestion: "Present salvation as a gift of grace received through faith",
            skip_negated: true,
        },
        DoctrinePredicate {
            name: "scriptural_error",
            regex: &RE_SCRIPTURAL_ERROR,
            severity: Severity::Moderate,
            description: "Claims Scripture is in error",
            suggestion: "Describe interpretive questions without asserting Scripture is wrong",
            skip_negated: false,
        },
        DoctrinePredicate {
            name: "universalism",
            regex: &RE_UNIVERSALISM,
            severity: Severity::Moderate,
            description: "Presents all religions as equally leading to God",
            suggestion: "Present the Christian understanding of salvation through Christ",
            skip_negated: false,
        },
    ];
    &PREDICATES
}

fn is_negated(fragment: &str) -> bool {
    let folded = fragment.to_lowercase();
    folded.contains("not by") || folded.contains("not through") || folded.contains("cannot earn")
}

pub fn check(text: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for predicate in all_predicates() {
        let Some(re) = predicate.regex.as_ref() else {
            tracing::warn!(predicate = predicate.name, "doctrine pattern failed to compile");
            continue;
        };
        let hit = re
            .find_iter(text)
            .find(|m| !(predicate.skip_negated && is_negated(m.as_str())));
        if let Some(m) = hit {
            outcome.push(
                ContentIssue::new(
                    IssueKind::Theological,
                    predicate.severity,
                    predicate.description,
                )
                .at(m.as_str()),
                Some(predicate.suggestion.to_string()),
            );
        }
    }

    outcome
}
