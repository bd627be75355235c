//! MCP tool definitions.
//!
//! Each submodule holds the parameter types of one tool family; `catalog`
//! binds them to their upstream endpoints.

pub mod account;
pub mod admin;
pub mod linkedin;
pub mod scrape;
pub mod search;

use friday_client::{ApiRequest, Endpoint, parse_target_url};
use friday_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dispatch::{ToolInput, ToolSpec};

pub use account::ListUserApiKeysParams;
pub use admin::{CreateApiKeyParams, RevokeApiKeyParams};
pub use linkedin::{CompanyParams, ProfileParams};
pub use scrape::{CrawlParams, ExtractParams, ScrapeParams};
pub use search::SearchParams;

/// Crawls take longer than single-page calls.
const CRAWL_TIMEOUT_SECS: u64 = 120;

/// Every registered tool, in listing order.
pub fn catalog() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new::<ProfileParams>(
            "scrape_linkedin_profile",
            "Scrapes a LinkedIn profile and returns structured data about the person",
            Endpoint::get("/profile").expect_field("profile"),
        ),
        ToolSpec::new::<CompanyParams>(
            "analyze_linkedin_company",
            "Analyzes a LinkedIn company page and returns insights",
            Endpoint::post("/analyze-company"),
        ),
        ToolSpec::new::<ScrapeParams>(
            "scrape_website",
            "Scrapes a single web page and returns its content in the requested formats",
            Endpoint::post("/scrape"),
        ),
        ToolSpec::new::<CrawlParams>(
            "crawl_website",
            "Crawls a website starting from a URL and returns the content of each visited page",
            Endpoint::post("/crawl").timeout_secs(CRAWL_TIMEOUT_SECS),
        ),
        ToolSpec::new::<ExtractParams>(
            "extract_structured_data",
            "Extracts structured data from a web page according to a natural-language query and optional schema",
            Endpoint::post("/extract"),
        ),
        ToolSpec::new::<SearchParams>(
            "google_search",
            "Searches the web and returns search engine result page data",
            Endpoint::post("/search"),
        ),
        ToolSpec::new::<EmptyParams>(
            "initialize_connector",
            "Initializes the Friday Data connector for this API key",
            Endpoint::post("/connector/initialize"),
        ),
        ToolSpec::new::<EmptyParams>(
            "initialize_mcp_connector",
            "Initializes the Friday Data MCP connector session for this API key",
            Endpoint::post("/mcp/initialize"),
        ),
        ToolSpec::new::<CreateApiKeyParams>(
            "create_api_key",
            "Creates a new Friday Data API key (requires an admin token)",
            Endpoint::post("/admin/api-keys").bearer_auth(),
        ),
        ToolSpec::new::<RevokeApiKeyParams>(
            "revoke_api_key",
            "Revokes an existing Friday Data API key (requires an admin token)",
            Endpoint::post("/admin/api-keys/revoke").bearer_auth(),
        ),
        ToolSpec::new::<EmptyParams>(
            "get_server_status",
            "Returns the status of the Friday Data API",
            Endpoint::get("/status"),
        ),
        ToolSpec::new::<EmptyParams>(
            "reset_rate_limit",
            "Resets the rate limit counters for this API key",
            Endpoint::post("/rate-limit/reset"),
        ),
        ToolSpec::new::<EmptyParams>(
            "list_subscription_plans",
            "Lists the available Friday Data subscription plans",
            Endpoint::get("/plans"),
        ),
        ToolSpec::new::<ListUserApiKeysParams>(
            "list_user_api_keys",
            "Lists the API keys that belong to a user",
            Endpoint::get("/users/{user_id}/api-keys"),
        ),
    ]
}

/// Arguments of tools that take none.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}

impl ToolInput for EmptyParams {
    fn into_request(self) -> ApiRequest {
        ApiRequest::new()
    }
}

fn require_url(field: &str, value: &str) -> Result<(), Error> {
    parse_target_url(value)
        .map(|_| ())
        .map_err(|e| Error::InvalidInput(format!("{field}: {e}")))
}

fn require_non_empty(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), Error> {
    if !(min..=max).contains(&value) {
        return Err(Error::InvalidInput(format!("{field} must be between {min} and {max}, got {value}")));
    }
    Ok(())
}
