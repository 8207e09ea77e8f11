//! SpamSense: heuristic spam/scam analysis for call transcripts and phone numbers
//!
//! Two stateless analyzers form the core: a text intent classifier
//! (weighted lexical + structural signals) and a phone number risk
//! analyzer (NANP normalization + structural heuristics + deny-list).
//! Both are pure functions; the MCP server and CLI are thin shells
//! around them.

pub mod config;
pub mod core;
pub mod errors;
pub mod types;

pub use errors::{Result, SpamsenseError};

// =============================================================================
// TEXT SCORING [C]
// =============================================================================

/// Discount applied to negative-signal weights. Legitimate-sounding
/// phrasing is weaker counter-evidence than scam phrasing is evidence.
pub const NEGATIVE_WEIGHT_DISCOUNT: f64 = 0.8;

/// Raw score divisor for normalization to [0,1].
/// 6.0 is around 2-3 strong signals (weight 2-3 each).
pub const SCORE_DIVISOR: f64 = 6.0;

/// Confidence floor: irreducible uncertainty of a heuristic-only method.
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Confidence span above the floor (floor + span = 1.0 at max score).
pub const CONFIDENCE_SPAN: f64 = 0.7;

/// Score threshold for the `spam` label
pub const LABEL_SPAM_THRESHOLD: f64 = 0.6;

/// Score threshold for the `likely_spam` label
pub const LABEL_LIKELY_SPAM_THRESHOLD: f64 = 0.4;

// =============================================================================
// STRUCTURAL SIGNAL WEIGHTS [C]
// =============================================================================

/// Weight per run of 2+ consecutive exclamation marks
pub const EXCLAMATION_RUN_WEIGHT: f64 = 0.5;

/// Weight per http:// or https:// occurrence
pub const LINK_WEIGHT: f64 = 0.7;

/// Cap on each structural signal's total contribution
pub const STRUCTURAL_SIGNAL_CAP: f64 = 1.5;

/// Fixed weight for a hidden/blocked caller ID
pub const HIDDEN_CALLER_ID_WEIGHT: f64 = 1.2;

/// Maximum reasons reported per analysis
pub const MAX_REASONS: usize = 6;

// =============================================================================
// PHONE SCORING [C] - priority-max table, worst single signal wins
// =============================================================================

pub const PHONE_SCORE_BLACKLISTED: u8 = 100;
pub const PHONE_SCORE_INVALID_LENGTH: u8 = 80;
pub const PHONE_SCORE_SUSPICIOUS_AREA_CODE: u8 = 60;
pub const PHONE_SCORE_REPEATED_DIGITS: u8 = 40;
pub const PHONE_SCORE_SEQUENTIAL_PATTERN: u8 = 30;
pub const PHONE_SCORE_FILLER_DIGITS: u8 = 25;
pub const PHONE_SCORE_TOLL_FREE: u8 = 10;

/// spam_score threshold for `high` risk
pub const RISK_HIGH_THRESHOLD: u8 = 60;

/// spam_score threshold for `medium` risk
pub const RISK_MEDIUM_THRESHOLD: u8 = 25;

/// Minimum run length for the repeated-digits signal
pub const REPEATED_DIGIT_RUN: usize = 6;

/// Window length for the sequential-pattern signal
pub const SEQUENTIAL_RUN: usize = 4;

// =============================================================================
// WIRE IDENTITY
// =============================================================================

/// Server name advertised during MCP initialization
pub const SERVER_NAME: &str = "spamsense-mcp";

/// MCP protocol revision spoken on the wire
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const VERSION: &str = "0.2.0";
