//! Test fixture loader for Shepherd golden datasets.
//!
//! Provides typed deserialization of the golden JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// One guardrail expectation.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardrailCase {
    pub id: String,
    pub text: String,
    pub valid: bool,
    #[serde(default)]
    pub reason_contains: Option<String>,
}

/// One content-filter expectation.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterCase {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub expects_scripture_references: bool,
    pub approved: bool,
    /// Lowercase severity name.
    pub severity: String,
    /// camelCase issue kinds that must be present.
    #[serde(default)]
    pub kinds: Vec<String>,
    #[serde(default)]
    pub suggestion_contains: Option<String>,
}

/// One fact-check expectation.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimCase {
    pub id: String,
    pub claim: String,
    pub claim_type: String,
    pub verdict: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub correction_contains: Option<String>,
}

pub fn guardrail_cases() -> Vec<GuardrailCase> {
    load_fixture("golden/guardrail_cases.json")
}

pub fn filter_cases() -> Vec<FilterCase> {
    load_fixture("golden/filter_cases.json")
}

pub fn claim_cases() -> Vec<ClaimCase> {
    load_fixture("golden/claim_cases.json")
}
