//! Text intent classifier: weighted lexical + structural signals
//!
//! Additive scoring: positive matches add their full weight, negative
//! matches subtract a discounted weight, and the difference is
//! normalized to [0,1]. Pure and total over strings.

use crate::core::rules::{
    INTENT_RULES, NEGATIVE_SIGNALS, POSITIVE_SIGNALS, RE_EXCLAMATION_RUN, RE_HIDDEN_CALLER_ID,
    RE_LINK,
};
use crate::types::{
    AnalysisMeta, CallDirection, Intent, SignalCategory, SignalMatch, SpamLabel, TextAnalysis,
};
use crate::{
    CONFIDENCE_FLOOR, CONFIDENCE_SPAN, EXCLAMATION_RUN_WEIGHT, HIDDEN_CALLER_ID_WEIGHT,
    LABEL_LIKELY_SPAM_THRESHOLD, LABEL_SPAM_THRESHOLD, LINK_WEIGHT, MAX_REASONS,
    NEGATIVE_WEIGHT_DISCOUNT, SCORE_DIVISOR, STRUCTURAL_SIGNAL_CAP,
};

/// Input to a classification run. Only `text` matters for scoring
/// (plus `caller_id` for the hidden-caller signal); the rest is echoed
/// back in the result's `meta`.
#[derive(Debug, Clone, Default)]
pub struct ClassifyInput {
    pub text: String,
    pub caller_id: Option<String>,
    pub direction: Option<CallDirection>,
    pub locale: Option<String>,
}

impl ClassifyInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Stateless text classifier
#[derive(Debug, Default)]
pub struct TextClassifier;

impl TextClassifier {
    /// Create new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify text and return the full analysis. Never fails; empty
    /// input yields score 0 and `not_spam`.
    pub fn classify(&self, input: &ClassifyInput) -> TextAnalysis {
        let content = input.text.trim();

        let mut matches: Vec<SignalMatch> = Vec::new();
        let mut pos = 0.0;
        let mut neg = 0.0;

        for rule in POSITIVE_SIGNALS.iter() {
            if rule.pattern.is_match(content) {
                matches.push(SignalMatch::positive(
                    rule.pattern.as_str(),
                    rule.weight,
                    rule.reason,
                ));
                pos += rule.weight;
            }
        }
        for rule in NEGATIVE_SIGNALS.iter() {
            if rule.pattern.is_match(content) {
                matches.push(SignalMatch::negative(
                    rule.pattern.as_str(),
                    rule.weight,
                    rule.reason,
                ));
                neg += rule.weight * NEGATIVE_WEIGHT_DISCOUNT;
            }
        }

        // Structural signals, appended after the declared rules
        let exclamation_runs = RE_EXCLAMATION_RUN.find_iter(content).count();
        if exclamation_runs > 0 {
            let weight = STRUCTURAL_SIGNAL_CAP.min(EXCLAMATION_RUN_WEIGHT * exclamation_runs as f64);
            matches.push(SignalMatch::positive(
                "!{2,}",
                weight,
                "Excessive punctuation",
            ));
            pos += weight;
        }

        let link_count = RE_LINK.find_iter(content).count();
        if link_count > 0 {
            let weight = STRUCTURAL_SIGNAL_CAP.min(LINK_WEIGHT * link_count as f64);
            matches.push(SignalMatch::positive(
                "https?://",
                weight,
                "Contains external link(s)",
            ));
            pos += weight;
        }

        if let Some(caller_id) = input.caller_id.as_deref() {
            if RE_HIDDEN_CALLER_ID.is_match(caller_id) {
                matches.push(SignalMatch::positive(
                    "blocked/unknown callerId",
                    HIDDEN_CALLER_ID_WEIGHT,
                    "Hidden caller ID",
                ));
                pos += HIDDEN_CALLER_ID_WEIGHT;
            }
        }

        // Normalize; rounding happens before labeling so the serialized
        // score and the label always agree at the thresholds.
        let raw_score = pos - neg;
        let score = round2((raw_score / SCORE_DIVISOR).clamp(0.0, 1.0));
        let confidence = round2((CONFIDENCE_FLOOR + score * CONFIDENCE_SPAN).clamp(0.0, 1.0));

        let label = if score >= LABEL_SPAM_THRESHOLD {
            SpamLabel::Spam
        } else if score >= LABEL_LIKELY_SPAM_THRESHOLD {
            SpamLabel::LikelySpam
        } else {
            SpamLabel::NotSpam
        };
        let is_spam = label == SpamLabel::Spam;

        // First matching intent rule wins; a spam verdict overrides the scan
        let mut intent = Intent::Unknown;
        for rule in INTENT_RULES.iter() {
            if rule.pattern.is_match(content) {
                intent = rule.intent;
                break;
            }
        }
        if is_spam {
            intent = Intent::ScamSpam;
        }

        // On a spam verdict only positive evidence is worth reporting;
        // take the first few matches, then drop duplicate reasons.
        let mut reasons: Vec<String> = Vec::new();
        for m in matches
            .iter()
            .filter(|m| !is_spam || m.category == SignalCategory::Positive)
            .take(MAX_REASONS)
        {
            if !reasons.contains(&m.reason) {
                reasons.push(m.reason.clone());
            }
        }

        TextAnalysis {
            is_spam,
            label,
            confidence,
            intent,
            score,
            reasons,
            matches,
            meta: AnalysisMeta {
                direction: input.direction,
                caller_id: input.caller_id.clone(),
                locale: input.locale.clone(),
                length: content.chars().count(),
            },
        }
    }
}

/// Round to two decimals (wire precision of score and confidence)
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// =============================================================================
// TESTS
// =============================================================================
