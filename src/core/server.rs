//! Tool registry and dispatch
//!
//! `SpamsenseServer` owns both analyzers and maps tool calls onto them.
//! Validation happens here, before the analyzers run; the analyzers
//! themselves are total and never fail. Any failure is reported as an
//! `isError` tool result, never as a transport-level error.

use colored::Colorize;
use serde_json::{json, Value};

use crate::core::intent::{ClassifyInput, TextClassifier};
use crate::core::phone::PhoneAnalyzer;
use crate::core::rpc::{CallToolResult, ToolDefinition};
use crate::types::{CallDirection, SpamLabel, TextAnalysis};

pub const TOOL_DETECT_CALL_INTENT: &str = "detect_call_intent";
pub const TOOL_CHECK_PHONE: &str = "spamsense_check_phone";

/// Stateless tool server; safe to share across concurrent requests
#[derive(Debug, Default)]
pub struct SpamsenseServer {
    classifier: TextClassifier,
    phone: PhoneAnalyzer,
}

impl SpamsenseServer {
    /// Create server with the built-in deny-list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create server around a pre-configured phone analyzer (e.g. with
    /// an operator-extended deny-list)
    pub fn with_phone_analyzer(phone: PhoneAnalyzer) -> Self {
        Self {
            classifier: TextClassifier::new(),
            phone,
        }
    }

    /// The advertised tool catalog
    pub fn tool_definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: TOOL_DETECT_CALL_INTENT,
                description: "Analyzes call or message text to determine if the intent is \
                              spam/scam, with confidence and reasons.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "Call transcript, voicemail, or message content to analyze"
                        },
                        "callerId": {
                            "type": "string",
                            "description": "Caller ID or phone number (optional)"
                        },
                        "direction": {
                            "type": "string",
                            "description": "Call direction (inbound/outbound)",
                            "enum": ["inbound", "outbound"]
                        },
                        "locale": {
                            "type": "string",
                            "description": "Locale hint like en-US (optional)"
                        },
                        "debug": {
                            "type": "boolean",
                            "description": "Include extra debug details in stderr logs"
                        }
                    },
                    "required": ["text"],
                    "additionalProperties": false
                }),
            },
            ToolDefinition {
                name: TOOL_CHECK_PHONE,
                description: "Analyze a phone number for spam risk using pattern heuristics \
                              and optional blacklist. Returns JSON.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "number": {
                            "type": "string",
                            "description": "Phone number in any format"
                        }
                    },
                    "required": ["number"]
                }),
            },
        ]
    }

    /// Dispatch a tool call by name
    pub fn call_tool(&self, name: &str, arguments: &Value) -> CallToolResult {
        let result = match name {
            TOOL_DETECT_CALL_INTENT => self.detect_call_intent(arguments),
            TOOL_CHECK_PHONE => self.check_phone(arguments),
            other => CallToolResult::error(format!("Unknown tool: {}", other)),
        };
        log::debug!("tool {} -> isError={}", name, result.is_error);
        result
    }

    fn detect_call_intent(&self, arguments: &Value) -> CallToolResult {
        let text = arguments.get("text").and_then(Value::as_str);
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                let body = json!({"error": "Missing required 'text' string in arguments"});
                return CallToolResult::error(
                    serde_json::to_string_pretty(&body).unwrap_or_default(),
                );
            }
        };

        // Optional fields are lenient: wrong-typed values are ignored
        let input = ClassifyInput {
            text: text.to_string(),
            caller_id: arguments
                .get("callerId")
                .and_then(Value::as_str)
                .map(str::to_string),
            direction: arguments
                .get("direction")
                .and_then(Value::as_str)
                .and_then(parse_direction),
            locale: arguments
                .get("locale")
                .and_then(Value::as_str)
                .map(str::to_string),
        };
        let debug = arguments
            .get("debug")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let analysis = self.classifier.classify(&input);
        print_verdict_banner(&analysis, debug);

        match serde_json::to_string_pretty(&analysis) {
            Ok(text) => CallToolResult::text(text),
            Err(e) => {
                let body = json!({"error": e.to_string(), "status": "failed"});
                CallToolResult::error(serde_json::to_string_pretty(&body).unwrap_or_default())
            }
        }
    }

    fn check_phone(&self, arguments: &Value) -> CallToolResult {
        let number = match arguments.get("number").and_then(Value::as_str) {
            Some(number) => number,
            None => {
                return CallToolResult::error(format!(
                    "Error: Invalid arguments for {}",
                    TOOL_CHECK_PHONE
                ));
            }
        };

        let analysis = self.phone.analyze(number);
        match serde_json::to_string_pretty(&analysis) {
            Ok(text) => CallToolResult::text(text),
            Err(e) => {
                let body = json!({"error": e.to_string(), "status": "failed"});
                CallToolResult::error(serde_json::to_string_pretty(&body).unwrap_or_default())
            }
        }
    }
}

fn parse_direction(value: &str) -> Option<CallDirection> {
    match value {
        "inbound" => Some(CallDirection::Inbound),
        "outbound" => Some(CallDirection::Outbound),
        _ => None,
    }
}

/// Operator-facing verdict line on stderr, out of band of the protocol
fn print_verdict_banner(analysis: &TextAnalysis, debug: bool) {
    let banner = match analysis.label {
        SpamLabel::Spam => "🚫 Spam Intent Detected".red().bold(),
        SpamLabel::LikelySpam => "⚠️ Likely Spam Intent".yellow().bold(),
        SpamLabel::NotSpam => "✅ Not Spam Intent".green().bold(),
    };
    eprintln!(
        "{} {}",
        banner,
        format!("(confidence: {:.0}%)", analysis.confidence * 100.0).bright_black()
    );
    if debug {
        eprintln!("{} {}", "Reasons:".cyan(), analysis.reasons.join("; "));
        if !analysis.matches.is_empty() {
            let signals: Vec<String> = analysis
                .matches
                .iter()
                .map(|m| format!("{}:{}[{}]", m.category, m.pattern, m.weight))
                .collect();
            eprintln!("{} {}", "Matched Signals:".cyan(), signals.join(", "));
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definitions_shape() {
        let tools = SpamsenseServer::tool_definitions();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, TOOL_DETECT_CALL_INTENT);
        assert_eq!(tools[1].name, TOOL_CHECK_PHONE);
        assert_eq!(tools[0].input_schema["required"][0], "text");
        assert_eq!(tools[1].input_schema["required"][0], "number");
    }

    #[test]
    fn test_detect_call_intent_requires_text() {
        let server = SpamsenseServer::new();
        for args in [json!({}), json!({"text": 42}), json!({"text": "   "})] {
            let result = server.call_tool(TOOL_DETECT_CALL_INTENT, &args);
            assert!(result.is_error, "args {:?}", args);
            assert!(result.content[0]
                .text
                .contains("Missing required 'text' string"));
        }
    }

    #[test]
    fn test_detect_call_intent_returns_analysis_json() {
        let server = SpamsenseServer::new();
        let args = json!({"text": "URGENT! You have WON a FREE prize, call now!!"});
        let result = server.call_tool(TOOL_DETECT_CALL_INTENT, &args);
        assert!(!result.is_error);
        let body: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(body["isSpam"], true);
        assert_eq!(body["label"], "spam");
        assert_eq!(body["intent"], "scam/spam");
    }

    #[test]
    fn test_detect_call_intent_ignores_bad_optionals() {
        let server = SpamsenseServer::new();
        let args = json!({
            "text": "hello there",
            "callerId": 123,
            "direction": "sideways",
            "locale": ["en"]
        });
        let result = server.call_tool(TOOL_DETECT_CALL_INTENT, &args);
        assert!(!result.is_error);
        let body: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(body["meta"]["callerId"], Value::Null);
        assert_eq!(body["meta"]["direction"], Value::Null);
        assert_eq!(body["meta"]["locale"], Value::Null);
    }

    #[test]
    fn test_check_phone_requires_number_string() {
        let server = SpamsenseServer::new();
        for args in [json!({}), json!({"number": 8005551234u64})] {
            let result = server.call_tool(TOOL_CHECK_PHONE, &args);
            assert!(result.is_error, "args {:?}", args);
            assert_eq!(
                result.content[0].text,
                "Error: Invalid arguments for spamsense_check_phone"
            );
        }
    }

    #[test]
    fn test_check_phone_returns_analysis_json() {
        let server = SpamsenseServer::new();
        let result = server.call_tool(TOOL_CHECK_PHONE, &json!({"number": "18095551234"}));
        assert!(!result.is_error);
        let body: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(body["spam_score"], 100);
        assert_eq!(body["risk_level"], "high");
        assert_eq!(body["signals"]["blacklisted"], true);
    }

    #[test]
    fn test_unknown_tool() {
        let server = SpamsenseServer::new();
        let result = server.call_tool("frobnicate", &json!({}));
        assert!(result.is_error);
        assert_eq!(result.content[0].text, "Unknown tool: frobnicate");
    }
}
