//! Static signal tables: lexical rules, intent rules, area-code sets,
//! and the built-in deny-list.
//!
//! Declaration order is load-bearing: matches are reported in rule
//! order and the first matching intent rule wins. Compiled once at
//! first use; read-only afterwards, safe for concurrent readers.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

use crate::types::Intent;

/// A weighted lexical detection rule
pub struct SignalRule {
    pub pattern: Regex,
    pub weight: f64,
    pub reason: &'static str,
}

/// A topical intent rule, tested in declaration order
pub struct IntentRule {
    pub intent: Intent,
    pub pattern: Regex,
}

fn signal(pattern: &str, weight: f64, reason: &'static str) -> SignalRule {
    SignalRule {
        pattern: compile(pattern),
        weight,
        reason,
    }
}

fn intent(intent: Intent, pattern: &str) -> IntentRule {
    IntentRule {
        intent,
        pattern: compile(pattern),
    }
}

/// All rule patterns match case-insensitively; the flag lives on the
/// builder so `Regex::as_str` reports the bare pattern source.
fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap()
}

lazy_static! {
    // =========================================================================
    // Positive signals - evidence of spam/scam intent
    // =========================================================================
    pub static ref POSITIVE_SIGNALS: Vec<SignalRule> = vec![
        signal(r"free\b|prize|win(?:ner)?\b|lottery|sweepstake", 3.0, "Prize/lottery bait"),
        signal(r"gift\s*card|voucher", 2.5, "Gift card incentive"),
        signal(r"act\s*now|urgent|immediately|limited\s*time", 2.0, "Urgency pressure"),
        signal(r"verify\s+(?:your\s+)?(?:identity|account|details|information)", 3.0, "Verification lure"),
        signal(r"bank\s+account|routing\s+number|sort\s+code|otp\b|one[-\s]?time\s*password", 2.5, "Sensitive data request"),
        signal(r"warranty|extended\s+warranty|auto\s+warranty", 3.0, "Car warranty spam"),
        signal(r"(irs|revenue\s+service|tax\s+office)\b", 3.0, "Government/tax scare"),
        signal(r"(account|amazon|apple|microsoft).{0,20}(suspended|locked|unusual|suspicious)", 3.0, "Account suspension scare"),
        signal(r"press\s*(?:1|one)\b|automated\s+message|robocall", 2.5, "Robocall prompt"),
        signal(r"pre-?approved|guaranteed\s+loan|payday\s+loan", 2.5, "Loan bait"),
        signal(r"student\s+loan\s+forgiveness|debt\s+relief", 2.5, "Debt relief bait"),
        signal(r"(bitcoin|crypto(?:currency)?)\b", 2.0, "Crypto lure"),
        signal(r"delivery\s+failed|final\s+attempt|customs\s+(?:fee|duty)", 2.0, "Fake delivery notice"),
        signal(r"wire\s+transfer|western\s+union|moneygram", 2.5, "Wire transfer request"),
        signal(r"gift\s*card|itunes\s*card|steam\s*card", 3.0, "Gift-card payment request"),
        signal(r"confidential|do\s+not\s+share|secret", 1.5, "Secrecy pressure"),
    ];

    // =========================================================================
    // Negative signals - evidence of legitimate intent
    // =========================================================================
    pub static ref NEGATIVE_SIGNALS: Vec<SignalRule> = vec![
        signal(r"interview|schedule|meeting|calendar|agenda", 2.0, "Business scheduling"),
        signal(r"doctor|clinic|dentist|appointment|pharmacy", 2.0, "Healthcare appointment"),
        signal(r"delivery|courier|tracking\s+number|order\s+update", 1.5, "Logistics update"),
        signal(r"invoice|receipt|purchase order|purchase-order|quote", 1.5, "Transactional docs"),
        signal(r"recruit(er|ing)|candidate|offer\s+letter|hiring", 1.5, "Hiring/recruiting"),
        signal(r"follow\s*up|as\s+discussed|per\s+our\s+call", 1.2, "Contextual follow-up"),
    ];

    // =========================================================================
    // Intent rules - first match wins
    // =========================================================================
    pub static ref INTENT_RULES: Vec<IntentRule> = vec![
        intent(Intent::ScamSpam, r"(warranty|sweepstake|lottery|verify\s+account|account\s+suspended|press\s*1|gift\s*card|student\s+loan|debt\s+relief|irs|tax\s+office)"),
        intent(Intent::Sales, r"(offer|quote|plan|subscribe|discount|limited\s*time|save\s+\d+%)"),
        intent(Intent::Support, r"(support|help\s+desk|issue|ticket|troubleshoot|service\s+request)"),
        intent(Intent::Delivery, r"(delivery|courier|package|parcel|driver|drop\s*off|pickup)"),
        intent(Intent::Recruiting, r"(interview|resume|cv|opening|position|role|candidate)"),
        intent(Intent::Collections, r"(past\s+due|overdue|collections|balance\s+due|debt\s+collector)"),
        intent(Intent::Personal, r"(dinner|party|family|catch\s*up|birthday|see\s+you)"),
    ];

    // =========================================================================
    // Structural patterns
    // =========================================================================

    /// Runs of 2+ exclamation marks
    pub static ref RE_EXCLAMATION_RUN: Regex = Regex::new(r"!{2,}").unwrap();

    /// External link occurrences
    pub static ref RE_LINK: Regex = compile(r"https?://");

    /// Hidden/withheld caller ID strings
    pub static ref RE_HIDDEN_CALLER_ID: Regex = compile(r"unknown|private|blocked|no\s*caller\s*id");

    // =========================================================================
    // Area-code sets and deny-list
    // =========================================================================

    /// NANP area codes historically associated with premium-rate and
    /// callback scams (the "809 scam" family).
    pub static ref SUSPICIOUS_AREA_CODES: HashSet<&'static str> = [
        "809", "876", "284", "473", "649", "664", "721", "758", "784", "868", "869", "441",
    ]
    .into_iter()
    .collect();

    /// NANP toll-free area codes
    pub static ref TOLL_FREE_AREA_CODES: HashSet<&'static str> = [
        "800", "833", "844", "855", "866", "877", "888",
    ]
    .into_iter()
    .collect();

    /// Built-in deny-list of known-abusive numbers, normalized to their
    /// digit strings. Operators extend it via configuration; the analyzer
    /// itself never mutates it.
    pub static ref DEFAULT_BLACKLIST: HashSet<&'static str> = [
        "18095551234",
        "18095550000",
        "18765551234",
        "12845551234",
        "16495551234",
        "17215551234",
        "17585551234",
        "17845551234",
        "18685551234",
        "18695551234",
        "14415551234",
    ]
    .into_iter()
    .collect();
}

// =============================================================================
// TESTS
// =============================================================================
