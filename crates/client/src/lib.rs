//! Client code for friday-mcp.
//!
//! This crate provides the Friday Data API client, its transport seam, and
//! URL helpers shared by the server's tool layer.

pub mod friday;
pub mod url;

pub use friday::{
    ApiRequest, AuthScheme, ClientConfig, DEFAULT_TIMEOUT_SECS, Endpoint, FridayClient, HttpRequest, HttpResponse,
    ReqwestTransport, ResponseShape, Transport, X_API_KEY,
};
pub use reqwest::{Method, StatusCode, header};
pub use self::url::{UrlError, parse_target_url, resolve_endpoint};
