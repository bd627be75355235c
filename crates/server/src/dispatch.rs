//! Table-driven tool dispatch.
//!
//! A `ToolSpec` pairs a tool name and description with an upstream
//! `Endpoint` and the parameter type that validates and lowers the call
//! arguments. `ToolSpec::invoke` is the one routine every tool goes through:
//! validate, dispatch, and fold every failure into the error envelope.

use std::sync::Arc;

use friday_client::{ApiRequest, Endpoint, FridayClient};
use friday_core::Error;
use rmcp::handler::server::common::schema_for_type;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Typed arguments of one tool.
pub trait ToolInput: DeserializeOwned + JsonSchema + 'static {
    /// Check constraints serde cannot express (URL shape, ranges, non-empty strings).
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Lower validated arguments into path, query, body and credential parts.
    fn into_request(self) -> ApiRequest;
}

/// Static description of one registered tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: Endpoint,
    schema: fn() -> Arc<JsonObject>,
    prepare: fn(JsonObject) -> Result<ApiRequest, Error>,
}

impl ToolSpec {
    pub fn new<T: ToolInput>(name: &'static str, description: &'static str, endpoint: Endpoint) -> Self {
        Self { name, description, endpoint, schema: schema_for_type::<T>, prepare: prepare::<T> }
    }

    /// JSON schema of the tool's arguments.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        (self.schema)()
    }

    /// MCP tool registration entry.
    pub fn tool(&self) -> Tool {
        Tool::new(self.name, self.description, self.input_schema())
    }

    /// Validate `args` and lower them into an upstream request. No network activity.
    pub fn prepare(&self, args: Option<JsonObject>) -> Result<ApiRequest, Error> {
        (self.prepare)(args.unwrap_or_default())
    }

    /// Run one invocation. Never fails at the protocol level: every error
    /// becomes an `{"error": ...}` result with `is_error` set.
    pub async fn invoke(&self, client: &FridayClient, args: Option<JsonObject>) -> CallToolResult {
        match self.run(client, args).await {
            Ok(payload) => {
                CallToolResult::success(vec![Content::text(serde_json::to_string_pretty(&payload).unwrap_or_default())])
            }
            Err(err) => {
                tracing::warn!(tool = self.name, code = err.code(), "{}", err);
                err.into()
            }
        }
    }

    async fn run(&self, client: &FridayClient, args: Option<JsonObject>) -> Result<Value, Error> {
        let request = self.prepare(args)?;
        client.dispatch(&self.endpoint, request).await
    }
}

fn prepare<T: ToolInput>(args: JsonObject) -> Result<ApiRequest, Error> {
    let input: T = serde_json::from_value(Value::Object(args)).map_err(|e| Error::InvalidInput(e.to_string()))?;
    input.validate()?;
    Ok(input.into_request())
}
