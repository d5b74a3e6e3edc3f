use serde::{Deserialize, Serialize};

/// Claim category, decided by the ordered classification patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Dating,
    Authorship,
    Person,
    Linguistic,
    Geographical,
    Theological,
    General,
}

impl ClaimType {
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimType::Dating => "dating",
            ClaimType::Authorship => "authorship",
            ClaimType::Person => "person",
            ClaimType::Linguistic => "linguistic",
            ClaimType::Geographical => "geographical",
            ClaimType::Theological => "theological",
            ClaimType::General => "general",
        }
    }
}

/// Outcome of checking a single claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Verified,
    Plausible,
    Disputed,
    Incorrect,
    Unverifiable,
}

/// Reliability tier of a piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    Primary,
    Scholarly,
    Archaeological,
    Traditional,
    Speculative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: String,
    pub description: String,
    pub reliability: Reliability,
}

impl Evidence {
    pub fn new(
        source: impl Into<String>,
        description: impl Into<String>,
        reliability: Reliability,
    ) -> Self {
        Self {
            source: source.into(),
            description: description.into(),
            reliability,
        }
    }
}

/// Result of checking one factual claim against the curated dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckResult {
    pub claim: String,
    pub claim_type: ClaimType,
    pub verdict: Verdict,
    /// Always within `[0.0, 1.0]`.
    pub confidence: f64,
    /// Never empty.
    pub evidence: Vec<Evidence>,
    pub corrections: Vec<String>,
}

impl FactCheckResult {
    pub fn new(
        claim: impl Into<String>,
        claim_type: ClaimType,
        verdict: Verdict,
        confidence: f64,
        evidence: Evidence,
    ) -> Self {
        Self {
            claim: claim.into(),
            claim_type,
            verdict,
            confidence: confidence.clamp(0.0, 1.0),
            evidence: vec![evidence],
            corrections: Vec::new(),
        }
    }

    pub fn with_correction(mut self, correction: impl Into<String>) -> Self {
        self.corrections.push(correction.into());
        self
    }

    pub fn is_incorrect(&self) -> bool {
        self.verdict == Verdict::Incorrect
    }
}

/// Verdict tally over a batch of claim results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactCheckSummary {
    pub total: usize,
    pub verified: usize,
    pub plausible: usize,
    pub disputed: usize,
    pub incorrect: usize,
    pub unverifiable: usize,
    pub average_confidence: f64,
}

impl FactCheckSummary {
    pub fn from_results(results: &[FactCheckResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Default::default()
        };
        for r in results {
            match r.verdict {
                Verdict::Verified => summary.verified += 1,
                Verdict::Plausible => summary.plausible += 1,
                Verdict::Disputed => summary.disputed += 1,
                Verdict::Incorrect => summary.incorrect += 1,
                Verdict::Unverifiable => summary.unverifiable += 1,
            }
        }
        if !results.is_empty() {
            summary.average_confidence =
                results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64;
        }
        summary
    }
}
