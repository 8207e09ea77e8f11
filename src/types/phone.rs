//! Phone analysis result types

use serde::{Deserialize, Serialize};

/// Output of number normalization: every non-digit stripped, then
/// classified against NANP lengths (10 digits, or 11 with a leading 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    /// The input exactly as received
    pub raw: String,
    /// Only the decimal digits of `raw`
    pub digits: String,
    pub country_code: Option<String>,
    pub national_number: Option<String>,
    /// Country code + national number, when both are present
    pub e164: Option<String>,
    pub valid: bool,
}

/// Normalized number parts as serialized in the analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberParts {
    pub digits: String,
    pub e164: Option<String>,
    pub country_code: Option<String>,
    pub national_number: Option<String>,
    /// First 3 digits of a 10-digit national number
    pub area_code: Option<String>,
    /// Next 3 digits of a 10-digit national number
    pub exchange: Option<String>,
}

/// Boolean risk flags, each independent of the others
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhoneSignals {
    pub invalid_length: bool,
    pub repeated_digits: bool,
    pub sequential_pattern: bool,
    pub contains_0000: bool,
    pub contains_555: bool,
    pub suspicious_area_code: bool,
    pub toll_free: bool,
    pub blacklisted: bool,
}

/// Risk bucket derived from the spam score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// spam_score < 25
    Low,
    /// 25 <= spam_score < 60
    Medium,
    /// spam_score >= 60
    High,
}

impl RiskLevel {
    /// ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            RiskLevel::Low => "\x1b[32m",    // Green
            RiskLevel::Medium => "\x1b[33m", // Yellow
            RiskLevel::High => "\x1b[31m",   // Red
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Medium => "⚠️",
            RiskLevel::High => "🚫",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Full phone risk result. Fully determined by the input number and the
/// analyzer's deny-list; immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneAnalysis {
    pub input: String,
    pub normalized: NumberParts,
    pub signals: PhoneSignals,
    /// Integer in [0,100]; worst single signal wins
    pub spam_score: u8,
    pub risk_level: RiskLevel,
}
