//! MCP server handler implementation.
//!
//! This module defines the main server handler that routes tool calls to the
//! catalog entries in [`crate::tools`].
use std::sync::Arc;

use friday_client::FridayClient;
use friday_core::Error;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult, PaginatedRequestParam,
        ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
};

use crate::dispatch::ToolSpec;
use crate::tools;

/// The main MCP server handler for friday-mcp.
#[derive(Clone)]
pub struct FridayServer {
    client: FridayClient,
    tools: Arc<[ToolSpec]>,
}

impl FridayServer {
    /// Create a new server handler over the full tool catalog.
    pub fn new(client: FridayClient) -> Self {
        Self { client, tools: tools::catalog().into() }
    }

    /// Registration entries for every tool.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolSpec::tool).collect()
    }

    /// Invoke a tool by name.
    ///
    /// Only an unknown name is a protocol error; tool failures come back as
    /// error-flagged results.
    pub async fn invoke(&self, name: &str, arguments: Option<JsonObject>) -> Result<CallToolResult, McpError> {
        let spec = self
            .tools
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;

        tracing::debug!("invoking tool {}", name);
        Ok(spec.invoke(&self.client, arguments).await)
    }
}

impl ServerHandler for FridayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "friday-mcp".into(),
                title: Some("Friday Data MCP".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some("Easiest way to integrate unblocked webscraping with your LLM".into()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult { meta: None, tools: self.tools(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&request.name, request.arguments).await
    }
}
