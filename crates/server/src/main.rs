//! friday-mcp server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::fmt::Display;

use anyhow::Result;
use friday_client::{ClientConfig, FridayClient};
use friday_core::{AppConfig, ConfigError};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod dispatch;
mod handler;
mod tools;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| fail("Invalid configuration", e));

    let client_config = match ClientConfig::try_from(&config) {
        Ok(client_config) => client_config,
        Err(e @ ConfigError::Missing { .. }) => fail("Missing FRIDAY_API_KEY environment variable", e),
        Err(e) => fail("Invalid configuration", e),
    };

    let client = FridayClient::new(client_config).unwrap_or_else(|e| fail("Failed to start server", e));

    tracing::info!("Starting friday-mcp server on stdio transport");

    let handler = handler::FridayServer::new(client);
    let transport = stdio();
    let server = serve_server(handler, transport)
        .await
        .unwrap_or_else(|e| fail("Failed to start server", e));

    tracing::info!("Server started successfully");

    server.waiting().await?;

    Ok(())
}

/// Log a fatal startup error to stderr and exit with status 1.
fn fail(message: &str, details: impl Display) -> ! {
    tracing::error!(details = %details, "{}", message);
    std::process::exit(1)
}
