//! JSON-RPC 2.0 envelopes and MCP payload types, plus message routing
//!
//! Tool failures are always `isError` results, never JSON-RPC errors;
//! the error channel is reserved for malformed requests and unknown
//! methods. Requests without an `id` are notifications and produce no
//! response.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::server::SpamsenseServer;
use crate::{PROTOCOL_VERSION, SERVER_NAME, VERSION};

// =============================================================================
// Standard JSON-RPC error codes
// =============================================================================

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Incoming JSON-RPC message
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outgoing JSON-RPC message
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

// =============================================================================
// MCP payload types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: &'static str,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Value,
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl InitializeResult {
    pub fn current() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            capabilities: ServerCapabilities { tools: json!({}) },
            server_info: ServerInfo {
                name: SERVER_NAME,
                version: VERSION,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Serialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDefinition>,
}

#[derive(Debug, Serialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<ContentItem>,
    pub is_error: bool,
}

impl CallToolResult {
    /// Successful text payload
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                kind: "text",
                text: text.into(),
            }],
            is_error: false,
        }
    }

    /// Tool-level failure (still a valid JSON-RPC result)
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                kind: "text",
                text: text.into(),
            }],
            is_error: true,
        }
    }
}

// =============================================================================
// Routing
// =============================================================================

/// Handle one raw message line/body. Unparseable input gets a parse
/// error with a null id; notifications return `None`.
pub fn handle_line(server: &SpamsenseServer, line: &str) -> Option<JsonRpcResponse> {
    match serde_json::from_str::<JsonRpcRequest>(line) {
        Ok(request) => handle_request(server, request),
        Err(e) => Some(JsonRpcResponse::error(
            Value::Null,
            PARSE_ERROR,
            format!("Parse error: {}", e),
        )),
    }
}

/// Route a parsed request to the server
pub fn handle_request(server: &SpamsenseServer, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let outcome: Result<Option<Value>, (i64, String)> = match request.method.as_str() {
        "initialize" => {
            log::info!("client initializing ({} {})", SERVER_NAME, VERSION);
            Ok(result_value(&InitializeResult::current()))
        }
        "notifications/initialized" => {
            log::info!("MCP client initialized");
            return None;
        }
        "ping" => Ok(Some(json!({}))),
        "tools/list" => {
            let list = ListToolsResult {
                tools: SpamsenseServer::tool_definitions(),
            };
            Ok(result_value(&list))
        }
        "tools/call" => {
            let params = request.params.unwrap_or_else(|| json!({}));
            match params.get("name").and_then(Value::as_str) {
                Some(name) => {
                    let arguments =
                        params.get("arguments").cloned().unwrap_or_else(|| json!({}));
                    Ok(result_value(&server.call_tool(name, &arguments)))
                }
                None => Err((INVALID_PARAMS, "Missing tool name in params".to_string())),
            }
        }
        method => Err((METHOD_NOT_FOUND, format!("Method not found: {}", method))),
    };

    // Requests without an id are notifications: no response either way
    let id = request.id?;
    Some(match outcome {
        Ok(Some(value)) => JsonRpcResponse::result(id, value),
        Ok(None) => JsonRpcResponse::error(id, INTERNAL_ERROR, "Failed to serialize result"),
        Err((code, message)) => JsonRpcResponse::error(id, code, message),
    })
}

fn result_value<T: Serialize>(value: &T) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("result serialization failed: {}", e);
            None
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
    fn test_response_skips_absent_fields() {
        let ok = JsonRpcResponse::result(json!(1), json!({"a": 1}));
        let text = serde_json::to_string(&ok).unwrap();
        assert!(!text.contains("error"));

        let err = JsonRpcResponse::error(json!(2), METHOD_NOT_FOUND, "nope");
        let text = serde_json::to_string(&err).unwrap();
        assert!(!text.contains("result"));
        assert!(text.contains("-32601"));
    }

    #[test]
    fn test_content_item_wire_shape() {
        let result = CallToolResult::text("hello");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "hello");
        assert_eq!(value["isError"], false);
    }

    #[test]
    fn test_initialize_result_wire_shape() {
        let value = serde_json::to_value(InitializeResult::current()).unwrap();
        assert_eq!(value["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(value["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(value["serverInfo"]["version"], VERSION);
        assert!(value["capabilities"]["tools"].is_object());
    }

    #[test]
    fn test_request_accepts_missing_optionals() {
        let request: JsonRpcRequest =
            serde_json::from_str(r#"{"method": "ping"}"#).unwrap();
        assert!(request.id.is_none());
        assert!(request.params.is_none());
    }
}
