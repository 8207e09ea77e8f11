//! Integration tests for the phone number risk analyzer

use pretty_assertions::assert_eq;
use serde_json::Value;
use spamsense::core::{normalize_number, PhoneAnalyzer};
use spamsense::types::RiskLevel;

#[test]
fn test_blacklisted_number_dominates_everything() {
    let analyzer = PhoneAnalyzer::new();
    let analysis = analyzer.analyze("18095551234");

    assert_eq!(analysis.normalized.digits, "18095551234");
    assert!(analysis.signals.blacklisted);
    // Structurally suspicious too (809 area, 555), but the deny-list
    // sets the ceiling
    assert!(analysis.signals.suspicious_area_code);
    assert!(analysis.signals.contains_555);
    assert_eq!(analysis.spam_score, 100);
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn test_clean_toll_free_number() {
    let analyzer = PhoneAnalyzer::new();
    let analysis = analyzer.analyze("8006721894");

    assert_eq!(analysis.normalized.area_code.as_deref(), Some("800"));
    assert!(analysis.signals.toll_free);
    assert!(!analysis.signals.invalid_length);
    assert!(!analysis.signals.repeated_digits);
    assert!(!analysis.signals.sequential_pattern);
    assert!(!analysis.signals.contains_0000);
    assert!(!analysis.signals.contains_555);
    assert!(!analysis.signals.suspicious_area_code);
    assert!(!analysis.signals.blacklisted);
    assert_eq!(analysis.spam_score, 10);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn test_toll_free_with_directory_exchange() {
    // 555 in the exchange outranks the toll-free floor
    let analyzer = PhoneAnalyzer::new();
    let analysis = analyzer.analyze("8005551234");

    assert!(analysis.signals.toll_free);
    assert!(analysis.signals.contains_555);
    assert_eq!(analysis.spam_score, 25);
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
}

#[test]
fn test_short_number_is_invalid_and_high_risk() {
    let analyzer = PhoneAnalyzer::new();
    let analysis = analyzer.analyze("123");

    assert!(!normalize_number("123").valid);
    assert!(analysis.signals.invalid_length);
    assert_eq!(analysis.spam_score, 80);
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn test_score_and_level_invariants() {
    let analyzer = PhoneAnalyzer::new();
    let inputs = [
        "",
        "123",
        "not a number",
        "8006721894",
        "18095551234",
        "5666666234",
        "2015987654",
        "2024670000",
        "+44 20 7946 0958",
        "(212) 684-7290",
    ];
    for input in inputs {
        let a = analyzer.analyze(input);
        assert!(a.spam_score <= 100, "input {:?}", input);

        let expected = if a.spam_score >= 60 {
            RiskLevel::High
        } else if a.spam_score >= 25 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        assert_eq!(a.risk_level, expected, "input {:?}", input);
        assert!(
            a.normalized.digits.chars().all(|c| c.is_ascii_digit()),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_priority_max_not_additive() {
    // Suspicious area code (60) + 555 (25) + toll-free-like floor must
    // not sum; the worst signal alone sets the score
    let analyzer = PhoneAnalyzer::new();
    let analysis = analyzer.analyze("8765550000");
    assert!(analysis.signals.suspicious_area_code);
    assert!(analysis.signals.contains_555);
    assert!(analysis.signals.contains_0000);
    assert_eq!(analysis.spam_score, 60);
}

#[test]
fn test_e164_formation() {
    let analyzer = PhoneAnalyzer::new();

    let eleven = analyzer.analyze("+1 (800) 672-1894");
    assert_eq!(eleven.normalized.e164.as_deref(), Some("+18006721894"));
    assert_eq!(eleven.normalized.country_code.as_deref(), Some("+1"));
    assert_eq!(eleven.normalized.national_number.as_deref(), Some("8006721894"));

    let invalid = analyzer.analyze("12345");
    assert!(invalid.normalized.e164.is_none());
    assert!(invalid.normalized.country_code.is_none());
}

#[test]
fn test_operator_extended_blacklist() {
    let mut analyzer = PhoneAnalyzer::new();
    analyzer.extend_blacklist(["+1 (202) 555-0100"]);

    let extended = analyzer.analyze("1-202-555-0100");
    assert!(extended.signals.blacklisted);
    assert_eq!(extended.spam_score, 100);

    // Built-in entries still present after extension
    assert!(analyzer.analyze("18095551234").signals.blacklisted);
}

#[test]
fn test_injected_blacklist_replaces_builtin() {
    let analyzer = PhoneAnalyzer::with_blacklist(["15551234567"]);
    assert!(analyzer.analyze("15551234567").signals.blacklisted);
    assert!(!analyzer.analyze("18095551234").signals.blacklisted);
}

#[test]
fn test_wire_format_field_names() {
    let analyzer = PhoneAnalyzer::new();
    let analysis = analyzer.analyze("8006721894");
    let value: Value = serde_json::to_value(&analysis).unwrap();

    assert_eq!(value["input"], "8006721894");
    assert!(value["normalized"]["digits"].is_string());
    assert!(value["normalized"]["e164"].is_string());
    assert!(value["normalized"]["country_code"].is_string());
    assert!(value["normalized"]["national_number"].is_string());
    assert!(value["normalized"]["area_code"].is_string());
    assert!(value["normalized"]["exchange"].is_string());
    for signal in [
        "invalid_length",
        "repeated_digits",
        "sequential_pattern",
        "contains_0000",
        "contains_555",
        "suspicious_area_code",
        "toll_free",
        "blacklisted",
    ] {
        assert!(value["signals"][signal].is_boolean(), "signal {}", signal);
    }
    assert!(value["spam_score"].is_u64());
    assert_eq!(value["risk_level"], "low");
}

#[test]
fn test_total_over_arbitrary_strings() {
    let analyzer = PhoneAnalyzer::new();
    for input in ["", "☎️", "++++", "abc def", "½⅓¼", "1".repeat(100).as_str()] {
        let a = analyzer.analyze(input);
        assert!(a.signals.invalid_length || a.normalized.digits.len() == 10 || a.normalized.digits.len() == 11);
    }
}
