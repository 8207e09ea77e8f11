//! Phone number risk analyzer: NANP normalization + structural heuristics
//!
//! Unlike the additive text scoring, phone scoring is priority-max: the
//! worst single signal sets the score. Pure and total over strings.

use std::collections::HashSet;

use crate::core::rules::{DEFAULT_BLACKLIST, SUSPICIOUS_AREA_CODES, TOLL_FREE_AREA_CODES};
use crate::types::{NormalizedNumber, NumberParts, PhoneAnalysis, PhoneSignals, RiskLevel};
use crate::{
    PHONE_SCORE_BLACKLISTED, PHONE_SCORE_FILLER_DIGITS, PHONE_SCORE_INVALID_LENGTH,
    PHONE_SCORE_REPEATED_DIGITS, PHONE_SCORE_SEQUENTIAL_PATTERN,
    PHONE_SCORE_SUSPICIOUS_AREA_CODE, PHONE_SCORE_TOLL_FREE, REPEATED_DIGIT_RUN,
    RISK_HIGH_THRESHOLD, RISK_MEDIUM_THRESHOLD, SEQUENTIAL_RUN,
};

/// Strip every non-digit and classify against NANP lengths: 11 digits
/// with a leading 1, or a bare 10-digit national number.
pub fn normalize_number(raw: &str) -> NormalizedNumber {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut country_code = None;
    let national_number;
    let mut valid = false;

    if digits.len() == 11 && digits.starts_with('1') {
        country_code = Some("+1".to_string());
        national_number = Some(digits[1..].to_string());
        valid = true;
    } else if digits.len() == 10 {
        country_code = Some("+1".to_string());
        national_number = Some(digits.clone());
        valid = true;
    } else {
        national_number = Some(digits.clone());
    }

    let e164 = match (&country_code, &national_number) {
        (Some(cc), Some(nn)) => Some(format!("{}{}", cc, nn)),
        _ => None,
    };

    NormalizedNumber {
        raw: raw.to_string(),
        digits,
        country_code,
        national_number,
        e164,
        valid,
    }
}

/// Stateless phone risk analyzer with an injectable deny-list
#[derive(Debug, Clone)]
pub struct PhoneAnalyzer {
    blacklist: HashSet<String>,
}

impl Default for PhoneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneAnalyzer {
    /// Create analyzer with the built-in deny-list
    pub fn new() -> Self {
        Self {
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create analyzer with a caller-supplied deny-list, replacing the
    /// built-in one. Entries are normalized to their digit strings.
    pub fn with_blacklist<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut analyzer = Self {
            blacklist: HashSet::new(),
        };
        analyzer.extend_blacklist(entries);
        analyzer
    }

    /// Add entries to the deny-list; entries without digits are ignored.
    pub fn extend_blacklist<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let digits: String = entry
                .as_ref()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if !digits.is_empty() {
                self.blacklist.insert(digits);
            }
        }
    }

    pub fn blacklist_len(&self) -> usize {
        self.blacklist.len()
    }

    /// Analyze a number string and return the full risk result
    pub fn analyze(&self, number: &str) -> PhoneAnalysis {
        let normalized = normalize_number(number);
        let digits = &normalized.digits;

        let (area_code, exchange) = match normalized.national_number.as_deref() {
            Some(nn) if nn.len() == 10 => (Some(nn[0..3].to_string()), Some(nn[3..6].to_string())),
            _ => (None, None),
        };

        let signals = PhoneSignals {
            invalid_length: !normalized.valid,
            repeated_digits: has_repeated_run(digits, REPEATED_DIGIT_RUN),
            sequential_pattern: has_sequential_window(digits, SEQUENTIAL_RUN),
            contains_0000: digits.contains("0000"),
            contains_555: digits.contains("555"),
            suspicious_area_code: area_code
                .as_deref()
                .map(|a| SUSPICIOUS_AREA_CODES.contains(a))
                .unwrap_or(false),
            toll_free: area_code
                .as_deref()
                .map(|a| TOLL_FREE_AREA_CODES.contains(a))
                .unwrap_or(false),
            blacklisted: self.blacklist.contains(digits.as_str()),
        };

        // Worst single signal wins
        let mut spam_score = 0u8;
        if signals.blacklisted {
            spam_score = spam_score.max(PHONE_SCORE_BLACKLISTED);
        }
        if signals.invalid_length {
            spam_score = spam_score.max(PHONE_SCORE_INVALID_LENGTH);
        }
        if signals.suspicious_area_code {
            spam_score = spam_score.max(PHONE_SCORE_SUSPICIOUS_AREA_CODE);
        }
        if signals.repeated_digits {
            spam_score = spam_score.max(PHONE_SCORE_REPEATED_DIGITS);
        }
        if signals.sequential_pattern {
            spam_score = spam_score.max(PHONE_SCORE_SEQUENTIAL_PATTERN);
        }
        if signals.contains_0000 || signals.contains_555 {
            spam_score = spam_score.max(PHONE_SCORE_FILLER_DIGITS);
        }
        if signals.toll_free {
            spam_score = spam_score.max(PHONE_SCORE_TOLL_FREE);
        }

        let risk_level = if spam_score >= RISK_HIGH_THRESHOLD {
            RiskLevel::High
        } else if spam_score >= RISK_MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        PhoneAnalysis {
            input: number.to_string(),
            normalized: NumberParts {
                digits: digits.clone(),
                e164: normalized.e164,
                country_code: normalized.country_code,
                national_number: normalized.national_number,
                area_code,
                exchange,
            },
            signals,
            spam_score,
            risk_level,
        }
    }
}

/// True when the digit string has a run of one digit repeated
/// `min_run` or more times consecutively
fn has_repeated_run(digits: &str, min_run: usize) -> bool {
    let bytes = digits.as_bytes();
    let mut run = 1;
    for pair in bytes.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// True when any `run`-digit window is consecutive-ascending or
/// consecutive-descending (digit-by-digit difference of exactly 1)
fn has_sequential_window(digits: &str, run: usize) -> bool {
    let values: Vec<i8> = digits.bytes().map(|b| (b - b'0') as i8).collect();
    if values.len() < run {
        return false;
    }
    for window in values.windows(run) {
        let ascending = window.windows(2).all(|p| p[1] - p[0] == 1);
        let descending = window.windows(2).all(|p| p[0] - p[1] == 1);
        if ascending || descending {
            return true;
        }
    }
    false
}

// =============================================================================
// TESTS
// =============================================================================
