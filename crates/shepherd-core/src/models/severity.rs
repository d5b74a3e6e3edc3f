use serde::{Deserialize, Serialize};

/// Issue severity. Totally ordered: `None < Minor < Moderate < Severe`.
///
/// Variant order is load-bearing: the derived `Ord` drives approval decisions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None,
    Minor,
    Moderate,
    Severe,
}

impl Severity {
    /// All variants in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::None,
        Severity::Minor,
        Severity::Moderate,
        Severity::Severe,
    ];

    /// Whether content carrying this severity must be rejected.
    pub fn blocks(self) -> bool {
        self >= Severity::Moderate
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}
