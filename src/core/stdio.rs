//! Stdio transport: newline-delimited JSON-RPC over stdin/stdout
//!
//! One message per line, one response per line, flushed immediately.
//! Diagnostics go to stderr so stdout stays a clean protocol stream.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::core::rpc;
use crate::core::server::SpamsenseServer;
use crate::errors::Result;

/// Serve MCP over stdin/stdout until EOF
pub async fn run_stdio(server: SpamsenseServer) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    log::info!("stdio transport started");
    eprintln!("SpamSense MCP server running on stdio");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(response) = rpc::handle_line(&server, line) {
            let mut payload = serde_json::to_vec(&response)?;
            payload.push(b'\n');
            stdout.write_all(&payload).await?;
            stdout.flush().await?;
        }
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}
