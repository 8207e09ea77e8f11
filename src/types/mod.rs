//! Core types for SpamSense

mod phone;
mod signal;
mod text;

pub use phone::{NormalizedNumber, NumberParts, PhoneAnalysis, PhoneSignals, RiskLevel};
pub use signal::{SignalCategory, SignalMatch};
pub use text::{AnalysisMeta, CallDirection, Intent, SpamLabel, TextAnalysis};
