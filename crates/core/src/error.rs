//! Unified error types for friday-mcp.
//!
//! The `Display` output of each variant is the exact message handed back to
//! the calling model inside the `{"error": ...}` envelope.

use rmcp::model::{CallToolResult, Content, ErrorCode, ErrorData as McpError};

/// Unified error types for tool invocations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Missing or malformed tool arguments, caught before any network call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The per-call timer fired before the upstream call completed.
    #[error("Request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// Non-success status from the upstream API. `body` is the raw response text.
    #[error("API Error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Success status, but the body is not JSON or lacks a required field.
    #[error("Invalid response format from API")]
    MalformedResponse,

    /// Connection, DNS or TLS failure while talking to the upstream API.
    #[error("Request failed: {0}")]
    Network(String),

    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl Error {
    /// Stable machine-readable code, used for structured logging.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::Timeout { .. } => "TIMEOUT",
            Error::Upstream { .. } => "UPSTREAM_ERROR",
            Error::MalformedResponse => "MALFORMED_RESPONSE",
            Error::Network(_) => "NETWORK_ERROR",
            Error::UnknownTool(_) => "UNKNOWN_TOOL",
        }
    }

    /// Render the error as the `{"error": "<message>"}` JSON text.
    pub fn envelope(&self) -> String {
        serde_json::json!({ "error": self.to_string() }).to_string()
    }
}

impl From<Error> for CallToolResult {
    fn from(err: Error) -> Self {
        CallToolResult::error(vec![Content::text(err.envelope())])
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidInput(_) | Error::UnknownTool(_) => -32602,
            Error::Upstream { .. } => -32000,
            Error::Timeout { .. } => -32001,
            Error::MalformedResponse => -32002,
            Error::Network(_) => -32003,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}
