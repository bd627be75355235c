//! Endpoint descriptions and per-call request data.

use std::fmt;
use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// Timeout applied to every endpoint unless overridden.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Credentials attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `X-API-KEY` header only.
    ApiKey,
    /// `X-API-KEY` plus `Authorization: Bearer <token>` from the call arguments.
    ApiKeyAndBearer,
}

/// What a success body must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Any decodable JSON value is returned as-is.
    Any,
    /// The named top-level field must be present and non-null; only its value is returned.
    Field(&'static str),
}

/// Static description of one upstream endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    /// Path template relative to the base URL, e.g. `/users/{user_id}/api-keys`.
    pub path: &'static str,
    pub timeout_secs: u64,
    pub auth: AuthScheme,
    pub shape: ResponseShape,
}

impl Endpoint {
    fn new(method: Method, path: &'static str) -> Self {
        Self { method, path, timeout_secs: DEFAULT_TIMEOUT_SECS, auth: AuthScheme::ApiKey, shape: ResponseShape::Any }
    }

    /// A read-only endpoint with no request body.
    pub fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    /// An endpoint that takes a JSON body.
    pub fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn timeout_secs(self, timeout_secs: u64) -> Self {
        Self { timeout_secs, ..self }
    }

    pub fn bearer_auth(self) -> Self {
        Self { auth: AuthScheme::ApiKeyAndBearer, ..self }
    }

    /// Require `field` in the success body and return only its value.
    pub fn expect_field(self, field: &'static str) -> Self {
        Self { shape: ResponseShape::Field(field), ..self }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Validated arguments of one invocation, lowered into HTTP terms.
#[derive(Clone, Default, PartialEq)]
pub struct ApiRequest {
    pub path_params: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    /// JSON body for POST endpoints. `None` sends `{}`.
    pub body: Option<Value>,
    /// Per-call credential for `AuthScheme::ApiKeyAndBearer` endpoints.
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    pub fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("path_params", &self.path_params)
            .field("query", &self.query)
            .field("body", &self.body)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_defaults() {
        let endpoint = Endpoint::post("/scrape");
        assert_eq!(endpoint.method, Method::POST);
        assert_eq!(endpoint.timeout(), Duration::from_secs(60));
        assert_eq!(endpoint.auth, AuthScheme::ApiKey);
        assert_eq!(endpoint.shape, ResponseShape::Any);
    }

    #[test]
    fn test_endpoint_builders() {
        let crawl = Endpoint::post("/crawl").timeout_secs(120);
        assert_eq!(crawl.timeout_secs, 120);
        assert_eq!(crawl.timeout(), Duration::from_secs(120));

        let profile = Endpoint::get("/profile").expect_field("profile");
        assert_eq!(profile.shape, ResponseShape::Field("profile"));

        let revoke = Endpoint::post("/admin/api-keys/revoke").bearer_auth();
        assert_eq!(revoke.auth, AuthScheme::ApiKeyAndBearer);
    }

    #[test]
    fn test_api_request_builder() {
        let request = ApiRequest::new()
            .path_param("user_id", "42")
            .query("profile_url", "https://example.com")
            .json(json!({ "name": "ci" }))
            .bearer("secret");

        assert_eq!(request.path_params, vec![("user_id", "42".to_string())]);
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.body, Some(json!({ "name": "ci" })));
        assert_eq!(request.bearer.as_deref(), Some("secret"));
    }

    #[test]
    fn test_api_request_debug_redacts_bearer() {
        let request = ApiRequest::new().bearer("super-secret-token");
        let debug = format!("{request:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
