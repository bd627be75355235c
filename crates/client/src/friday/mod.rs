//! Friday Data API client.
//!
//! Provides the single dispatch routine every tool goes through.
//!
//! ### Request contract
//!
//! - **Authentication**: `X-API-KEY` header on every call; key-management
//!   endpoints add `Authorization: Bearer <token>` from the call arguments.
//! - **Bodies**: GET sends none. POST sends JSON (`{}` when empty) with
//!   `Content-Type: application/json`.
//! - **Timeouts**: one timer per call covering send and body read. On expiry
//!   the request future is dropped and `Error::Timeout` is returned.
//! - **No retries**: every failure is returned to the caller as-is.

pub mod request;
pub mod response;
pub mod transport;

pub use request::{ApiRequest, AuthScheme, DEFAULT_TIMEOUT_SECS, Endpoint, ResponseShape};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

use std::sync::Arc;
use std::time::Instant;

use friday_core::{AppConfig, ConfigError, Error};
use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::url::resolve_endpoint;

/// Header carrying the account API key.
pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// Friday client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: url::Url,
    pub user_agent: String,
}

impl TryFrom<&AppConfig> for ClientConfig {
    type Error = ConfigError;

    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        let api_key = config.require_api_key()?.to_string();
        let base_url = url::Url::parse(&config.base_url)
            .map_err(|e| ConfigError::Invalid { field: "base_url".into(), reason: e.to_string() })?;

        Ok(Self { api_key, base_url, user_agent: config.user_agent.clone() })
    }
}

/// Friday Data API client.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct FridayClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl FridayClient {
    /// Create a new client backed by reqwest.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config: Arc::new(config), transport }
    }

    /// Issue exactly one request to `endpoint` and return the selected JSON payload.
    pub async fn dispatch(&self, endpoint: &Endpoint, request: ApiRequest) -> Result<Value, Error> {
        let http_request = self.build_request(endpoint, request)?;

        let start = Instant::now();
        tracing::debug!("calling Friday API: {} {}", endpoint.method.as_str(), endpoint.path);

        let http_response = tokio::time::timeout(endpoint.timeout(), self.transport.send(http_request))
            .await
            .map_err(|_| {
                tracing::warn!(
                    "{} {} timed out after {}s",
                    endpoint.method.as_str(),
                    endpoint.path,
                    endpoint.timeout_secs
                );
                Error::Timeout { secs: endpoint.timeout_secs }
            })??;

        tracing::debug!(
            "Friday API responded {} for {} in {:?}",
            http_response.status,
            endpoint.path,
            start.elapsed()
        );

        response::interpret(endpoint.shape, http_response)
    }

    fn build_request(&self, endpoint: &Endpoint, request: ApiRequest) -> Result<HttpRequest, Error> {
        let url = resolve_endpoint(&self.config.base_url, endpoint.path, &request.path_params, &request.query)
            .map_err(|e| Error::InvalidInput(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(X_API_KEY, credential(&self.config.api_key)?);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::USER_AGENT, plain(&self.config.user_agent)?);

        if endpoint.auth == AuthScheme::ApiKeyAndBearer {
            let token = request
                .bearer
                .ok_or_else(|| Error::InvalidInput("missing authorization credential".into()))?;
            headers.insert(header::AUTHORIZATION, credential(&format!("Bearer {token}"))?);
        }

        let body = if endpoint.method == Method::POST {
            let body = request.body.unwrap_or_else(|| Value::Object(Default::default()));
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
            Some(serde_json::to_vec(&body).map_err(|e| Error::InvalidInput(e.to_string()))?)
        } else {
            None
        };

        Ok(HttpRequest { method: endpoint.method.clone(), url, headers, body })
    }
}

fn plain(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidInput(format!("invalid header value: {e}")))
}

/// Header value hidden from `Debug` output.
fn credential(value: &str) -> Result<HeaderValue, Error> {
    let mut value = plain(value)?;
    value.set_sensitive(true);
    Ok(value)
}
