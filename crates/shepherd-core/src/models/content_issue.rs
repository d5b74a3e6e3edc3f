use serde::{Deserialize, Serialize};

use super::Severity;

/// Category of a content finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    Theological,
    Factual,
    Reverence,
    Inappropriate,
    ScriptureAccuracy,
    Denominational,
}

impl IssueKind {
    pub const ALL: [IssueKind; 6] = [
        IssueKind::Theological,
        IssueKind::Factual,
        IssueKind::Reverence,
        IssueKind::Inappropriate,
        IssueKind::ScriptureAccuracy,
        IssueKind::Denominational,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Theological => "theological",
            IssueKind::Factual => "factual",
            IssueKind::Reverence => "reverence",
            IssueKind::Inappropriate => "inappropriate",
            IssueKind::ScriptureAccuracy => "scriptureAccuracy",
            IssueKind::Denominational => "denominational",
        }
    }
}

/// A single finding produced by one of the content checkers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentIssue {
    pub kind: IssueKind,
    pub description: String,
    /// The offending text fragment, when one can be pointed at.
    pub location: Option<String>,
    pub severity: Severity,
}

impl ContentIssue {
    pub fn new(kind: IssueKind, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            location: None,
            severity,
        }
    }

    /// Attach the offending fragment.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
