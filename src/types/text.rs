//! Text analysis result types

use serde::{Deserialize, Serialize};

use crate::types::SignalMatch;

/// Verdict label derived from the normalized score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpamLabel {
    /// score < 0.4
    NotSpam,
    /// 0.4 <= score < 0.6
    LikelySpam,
    /// score >= 0.6
    Spam,
}

impl SpamLabel {
    /// ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SpamLabel::NotSpam => "\x1b[32m",    // Green
            SpamLabel::LikelySpam => "\x1b[33m", // Yellow
            SpamLabel::Spam => "\x1b[31m",       // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SpamLabel::NotSpam => "✅",
            SpamLabel::LikelySpam => "⚠️",
            SpamLabel::Spam => "🚫",
        }
    }
}

impl std::fmt::Display for SpamLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpamLabel::NotSpam => "not_spam",
            SpamLabel::LikelySpam => "likely_spam",
            SpamLabel::Spam => "spam",
        };
        write!(f, "{}", name)
    }
}

/// Coarse topical intent of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[serde(rename = "scam/spam")]
    ScamSpam,
    Sales,
    Support,
    Delivery,
    Recruiting,
    Collections,
    Personal,
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intent::ScamSpam => "scam/spam",
            Intent::Sales => "sales",
            Intent::Support => "support",
            Intent::Delivery => "delivery",
            Intent::Recruiting => "recruiting",
            Intent::Collections => "collections",
            Intent::Personal => "personal",
            Intent::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Direction of the call/message being analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

impl std::fmt::Display for CallDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CallDirection::Inbound => "inbound",
            CallDirection::Outbound => "outbound",
        };
        write!(f, "{}", name)
    }
}

/// Echo of the optional request context, plus trimmed text length
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    pub direction: Option<CallDirection>,
    pub caller_id: Option<String>,
    pub locale: Option<String>,
    pub length: usize,
}

/// Full classification result. Fully determined by its inputs; created
/// fresh per call and immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub is_spam: bool,
    pub label: SpamLabel,
    /// 0.3 floor up to 1.0 at maximum score
    pub confidence: f64,
    pub intent: Intent,
    /// Normalized weighted score in [0,1], rounded to two decimals
    pub score: f64,
    /// Deduplicated reason strings, at most six
    pub reasons: Vec<String>,
    /// Every fired signal in declaration order
    pub matches: Vec<SignalMatch>,
    pub meta: AnalysisMeta,
}
