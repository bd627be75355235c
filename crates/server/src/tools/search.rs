//! Web search (SERP) tool.

use friday_client::ApiRequest;
use friday_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{require_non_empty, require_range};
use crate::dispatch::ToolInput;

/// Input parameters for google_search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,

    /// Country or location to search from (default "US").
    #[serde(default = "default_location")]
    pub location: String,

    /// Number of results (1-100, default 15).
    #[serde(default = "default_num_results")]
    #[schemars(range(min = 1, max = 100))]
    pub num_results: u32,
}

fn default_location() -> String {
    "US".into()
}

fn default_num_results() -> u32 {
    15
}

impl ToolInput for SearchParams {
    fn validate(&self) -> Result<(), Error> {
        require_non_empty("query", &self.query)?;
        require_non_empty("location", &self.location)?;
        require_range("num_results", self.num_results, 1, 100)
    }

    fn into_request(self) -> ApiRequest {
        ApiRequest::new().json(json!({
            "query": self.query,
            "location": self.location,
            "num_results": self.num_results,
        }))
    }
}
