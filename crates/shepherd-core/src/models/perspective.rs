//! User-selected doctrinal traditions. Read-only input that only shapes prompt
//! and fallback wording, never pass/fail outcomes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::PromptHints;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TheologicalPerspective {
    Reformed,
    Catholic,
    Orthodox,
    Lutheran,
    Anglican,
    Baptist,
    Methodist,
    Pentecostal,
    NonDenominational,
}

impl TheologicalPerspective {
    pub fn display_name(self) -> &'static str {
        match self {
            TheologicalPerspective::Reformed => "Reformed",
            TheologicalPerspective::Catholic => "Catholic",
            TheologicalPerspective::Orthodox => "Orthodox",
            TheologicalPerspective::Lutheran => "Lutheran",
            TheologicalPerspective::Anglican => "Anglican",
            TheologicalPerspective::Baptist => "Baptist",
            TheologicalPerspective::Methodist => "Methodist",
            TheologicalPerspective::Pentecostal => "Pentecostal",
            TheologicalPerspective::NonDenominational => "non-denominational",
        }
    }
}

/// Ordered, de-duplicated set of selected traditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectiveSet(BTreeSet<TheologicalPerspective>);

impl PerspectiveSet {
    pub fn new(perspectives: impl IntoIterator<Item = TheologicalPerspective>) -> Self {
        Self(perspectives.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TheologicalPerspective> + '_ {
        self.0.iter().copied()
    }

    /// Human-readable list, e.g. "Reformed and Baptist".
    pub fn describe(&self) -> Option<String> {
        let names: Vec<&str> = self.iter().map(|p| p.display_name()).collect();
        match names.as_slice() {
            [] => None,
            [one] => Some((*one).to_string()),
            [init @ .., last] => Some(format!("{} and {}", init.join(", "), last)),
        }
    }

    /// Prompt guidance for the provider.
    pub fn prompt_hints(&self) -> PromptHints {
        PromptHints {
            perspective_guidance: self.describe().map(|d| {
                format!("Where traditions differ, note how the {d} tradition reads this passage.")
            }),
        }
    }

    /// Closing line appended to fallback text.
    pub fn fallback_note(&self) -> Option<String> {
        self.describe().map(|d| {
            format!("You may also find it helpful to explore how the {d} tradition has understood this passage.")
        })
    }
}
