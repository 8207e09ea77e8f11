//! Integration tests for the HTTP transport

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use spamsense::core::{create_router, SpamsenseServer};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_router() -> axum::Router {
    create_router(Arc::new(SpamsenseServer::new()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_liveness_endpoints() {
    for uri in ["/", "/health", "/_health"] {
        let app = create_test_router();
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "uri {}", uri);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["server"], "spamsense-mcp");
        assert_eq!(json["transport"], "http");
        assert!(json["version"].is_string());
    }
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_router();
    let request = json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"});

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["tools"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_mcp_tool_call_end_to_end() {
    let app = create_test_router();
    let request = json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {
            "name": "spamsense_check_phone",
            "arguments": {"number": "8006721894"}
        }
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["isError"], false);
    let payload: Value =
        serde_json::from_str(json["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(payload["risk_level"], "low");
    assert_eq!(payload["signals"]["toll_free"], true);
}

#[tokio::test]
async fn test_mcp_notification_returns_no_content() {
    let app = create_test_router();
    let request = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_mcp_malformed_body_is_parse_error() {
    let app = create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], -32700);
    assert_eq!(json["id"], Value::Null);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
