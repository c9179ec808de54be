//! Verification report types.

use serde::{Deserialize, Serialize};

/// Result of substituting one solution back into the original relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionCheck {
    /// What was substituted, e.g. `x = 2`.
    pub solution: String,
    pub left_side: f64,
    pub right_side: f64,
    pub difference: f64,
    pub is_valid: bool,
}

/// Result of sampling one point against a claimed solution region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalCheck {
    pub point: f64,
    /// Whether the point lies in the claimed solution set.
    pub inside: bool,
    /// Whether the original relation holds at the point.
    pub satisfies: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Low,
    Medium,
    Confirmed,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Confidence::High => "High",
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::Confirmed => "Confirmed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub checks: Vec<SubstitutionCheck>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interval_checks: Vec<IntervalCheck>,
    pub all_valid: bool,
    pub confidence: Confidence,
    pub notes: Vec<String>,
}
