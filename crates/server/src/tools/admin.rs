//! API key lifecycle tools.
//!
//! These need an admin token in addition to the configured API key. The token
//! travels in the `Authorization` header and never in the request body.

use friday_client::ApiRequest;
use friday_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::require_non_empty;
use crate::dispatch::ToolInput;

/// Input parameters for create_api_key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateApiKeyParams {
    /// Admin token authorizing key management.
    pub admin_token: String,

    /// Label for the new key.
    pub name: String,

    /// Subscription plan to attach to the key.
    #[serde(default)]
    pub plan: Option<String>,
}

impl ToolInput for CreateApiKeyParams {
    fn validate(&self) -> Result<(), Error> {
        require_non_empty("admin_token", &self.admin_token)?;
        require_non_empty("name", &self.name)
    }

    fn into_request(self) -> ApiRequest {
        let mut body = json!({ "name": self.name });
        if let Some(plan) = self.plan {
            body["plan"] = plan.into();
        }
        ApiRequest::new().json(body).bearer(self.admin_token.trim())
    }
}

/// Input parameters for revoke_api_key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RevokeApiKeyParams {
    /// Admin token authorizing key management.
    pub admin_token: String,

    /// The API key to revoke.
    pub api_key: String,
}

impl ToolInput for RevokeApiKeyParams {
    fn validate(&self) -> Result<(), Error> {
        require_non_empty("admin_token", &self.admin_token)?;
        require_non_empty("api_key", &self.api_key)
    }

    fn into_request(self) -> ApiRequest {
        ApiRequest::new()
            .json(json!({ "api_key": self.api_key }))
            .bearer(self.admin_token.trim())
    }
}
