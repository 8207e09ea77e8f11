//! Signal match records produced by the text classifier

use serde::{Deserialize, Serialize};

/// Whether a signal counts toward or against a spam verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    /// Evidence of spam/scam intent
    Positive,
    /// Evidence of legitimate intent
    Negative,
}

impl std::fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SignalCategory::Positive => "positive",
            SignalCategory::Negative => "negative",
        };
        write!(f, "{}", name)
    }
}

/// One fired signal: what matched, how much it weighed, and why it matters.
/// A run produces matches in signal declaration order, not by significance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalMatch {
    #[serde(rename = "type")]
    pub category: SignalCategory,
    /// Source text of the pattern (or a structural descriptor)
    pub pattern: String,
    pub weight: f64,
    pub reason: String,
}

impl SignalMatch {
    pub fn positive(pattern: impl Into<String>, weight: f64, reason: impl Into<String>) -> Self {
        Self {
            category: SignalCategory::Positive,
            pattern: pattern.into(),
            weight,
            reason: reason.into(),
        }
    }

    pub fn negative(pattern: impl Into<String>, weight: f64, reason: impl Into<String>) -> Self {
        Self {
            category: SignalCategory::Negative,
            pattern: pattern.into(),
            weight,
            reason: reason.into(),
        }
    }
}
