//! Stdio MCP server

use crate::error::{CliError, CliResult};
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use code_analysis::{Config, McpServer};
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;

/// Build a server from layered configuration
pub fn build_server() -> CliResult<McpServer> {
    McpServer::new(Config::new()).map_err(CliError::critical)
}

/// Serve MCP over stdin/stdout until the client disconnects or Ctrl-C
pub async fn run_server() -> i32 {
    let server = match build_server() {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create MCP server: {}", e.full_chain());
            return EXIT_ERROR;
        }
    };

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                ct_clone.cancel();
            }
            Err(e) => tracing::warn!("Failed to listen for ctrl+c: {}", e),
        }
    });

    let running = match serve_server(server, stdio()).await {
        Ok(running) => running,
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            return EXIT_WARNING;
        }
    };
    tracing::info!("MCP server started");

    tokio::select! {
        _ = ct.cancelled() => {
            tracing::info!("MCP server cancelled");
            EXIT_SUCCESS
        }
        quit = running.waiting() => match quit {
            Ok(reason) => {
                tracing::info!("MCP server exited: {:?}", reason);
                EXIT_SUCCESS
            }
            Err(e) => {
                tracing::error!("MCP server task failed: {}", e);
                EXIT_WARNING
            }
        },
    }
}
