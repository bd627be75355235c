//! LinkedIn profile and company tools.

use friday_client::ApiRequest;
use friday_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{require_range, require_url};
use crate::dispatch::ToolInput;

/// Input parameters for scrape_linkedin_profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileParams {
    /// Public LinkedIn profile URL, e.g. https://www.linkedin.com/in/username.
    pub profile_url: String,
}

impl ToolInput for ProfileParams {
    fn validate(&self) -> Result<(), Error> {
        require_url("profile_url", &self.profile_url)
    }

    fn into_request(self) -> ApiRequest {
        ApiRequest::new().query("profile_url", self.profile_url.trim())
    }
}

/// Input parameters for analyze_linkedin_company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompanyParams {
    /// LinkedIn company page URL, e.g. https://www.linkedin.com/company/name.
    pub linkedin_url: String,

    /// Number of results to analyze (1-100, default 15).
    #[serde(default = "default_count")]
    #[schemars(range(min = 1, max = 100))]
    pub count: u32,
}

fn default_count() -> u32 {
    15
}

impl ToolInput for CompanyParams {
    fn validate(&self) -> Result<(), Error> {
        require_url("linkedin_url", &self.linkedin_url)?;
        require_range("count", self.count, 1, 100)
    }

    fn into_request(self) -> ApiRequest {
        ApiRequest::new().json(json!({
            "linkedin_url": self.linkedin_url.trim(),
            "count": self.count,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Reply, StubTransport, client, text_of};
    use crate::tools::catalog;
    use friday_client::{Method, X_API_KEY};

    fn args(value: serde_json::Value) -> Option<rmcp::model::JsonObject> {
        value.as_object().cloned()
    }

    #[tokio::test]
    async fn test_profile_request_shape() {
        let transport = StubTransport::new(Reply::json(200, json!({ "profile": { "name": "Ada" } })));
        let spec = catalog().swap_remove(0);
        assert_eq!(spec.name, "scrape_linkedin_profile");

        let result = spec
            .invoke(&client(transport.clone()), args(json!({ "profile_url": "https://www.linkedin.com/in/ada" })))
            .await;
        assert!(!result.is_error.unwrap_or(false), "{}", text_of(&result));

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.url.path(), "/profile");
        assert_eq!(
            sent.url.query(),
            Some("profile_url=https%3A%2F%2Fwww.linkedin.com%2Fin%2Fada")
        );
        assert!(sent.body.is_none());
        assert_eq!(sent.headers[X_API_KEY], "test-key");
    }

    #[test]
    fn test_profile_rejects_non_url() {
        let params = ProfileParams { profile_url: "ada-lovelace".into() };
        assert!(matches!(params.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_company_defaults() {
        let params: CompanyParams =
            serde_json::from_value(json!({ "linkedin_url": "https://www.linkedin.com/company/acme" })).unwrap();
        assert_eq!(params.count, 15);

        let request = params.into_request();
        assert_eq!(request.body, Some(json!({ "linkedin_url": "https://www.linkedin.com/company/acme", "count": 15 })));
    }

    #[test]
    fn test_company_count_bounds() {
        let params = CompanyParams { linkedin_url: "https://www.linkedin.com/company/acme".into(), count: 101 };
        assert!(params.validate().is_err());

        let params = CompanyParams { linkedin_url: "https://www.linkedin.com/company/acme".into(), count: 0 };
        assert!(params.validate().is_err());
    }
}
