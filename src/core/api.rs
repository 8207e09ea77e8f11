//! HTTP transport for the MCP server
//!
//! Endpoints:
//! - POST /mcp - One JSON-RPC message per request
//! - GET  /, /health, /_health - Liveness probe

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::core::rpc;
use crate::core::server::SpamsenseServer;
use crate::errors::Result;
use crate::{SERVER_NAME, VERSION};

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: &'static str,
    pub version: &'static str,
    pub transport: &'static str,
}

/// Create the API router
pub fn create_router(server: Arc<SpamsenseServer>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/_health", get(health))
        .route("/mcp", post(mcp))
        .with_state(server)
}

/// Liveness probe, fixed OK payload
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        server: SERVER_NAME,
        version: VERSION,
        transport: "http",
    })
}

/// Handle one JSON-RPC message. Notifications get 204 No Content.
async fn mcp(State(server): State<Arc<SpamsenseServer>>, body: String) -> Response {
    match rpc::handle_line(&server, &body) {
        Some(response) => Json(response).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Run the HTTP server. Failure to bind is the only fatal error.
pub async fn run_server(addr: &str, server: SpamsenseServer) -> Result<()> {
    let router = create_router(Arc::new(server));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("http transport bound on {}", addr);
    println!("SpamSense MCP server running on http://{}", addr);
    println!("  POST /mcp     - JSON-RPC endpoint");
    println!("  GET  /health  - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
