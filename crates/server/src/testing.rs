//! Test doubles shared by the server's unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use friday_client::{ClientConfig, FridayClient, HttpRequest, HttpResponse, StatusCode, Transport};
use friday_core::Error;
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};

/// What the stub answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Never resolves.
    Hang,
    Respond { status: u16, body: Vec<u8> },
}

impl Reply {
    pub fn json(status: u16, value: Value) -> Self {
        Reply::Respond { status, body: value.to_string().into_bytes() }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Reply::Respond { status, body: body.as_bytes().to_vec() }
    }
}

/// Transport double that counts and records every request.
pub struct StubTransport {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self { reply, calls: AtomicUsize::new(0), requests: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            Reply::Hang => {
                std::future::pending::<()>().await;
                unreachable!("pending future resolved")
            }
            Reply::Respond { status, body } => Ok(HttpResponse {
                status: StatusCode::from_u16(*status).unwrap(),
                body: bytes::Bytes::from(body.clone()),
            }),
        }
    }
}

pub fn config() -> ClientConfig {
    ClientConfig {
        api_key: "test-key".into(),
        base_url: "https://api.fridaydata.tech".parse().unwrap(),
        user_agent: "friday-mcp/test".into(),
    }
}

pub fn client(transport: Arc<StubTransport>) -> FridayClient {
    FridayClient::with_transport(config(), transport)
}

/// Text of the single content item of a tool result.
pub fn text_of(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1);
    let content = serde_json::to_value(&result.content[0]).unwrap();
    content["text"].as_str().unwrap().to_string()
}

/// Minimal valid arguments for each catalog tool.
pub fn sample_args(tool: &str) -> JsonObject {
    let args = match tool {
        "scrape_linkedin_profile" => json!({ "profile_url": "https://www.linkedin.com/in/ada-lovelace" }),
        "analyze_linkedin_company" => json!({ "linkedin_url": "https://www.linkedin.com/company/analytical-engines" }),
        "scrape_website" => json!({ "url": "https://example.com" }),
        "crawl_website" => json!({ "url": "https://example.com/docs" }),
        "extract_structured_data" => json!({ "url": "https://example.com/pricing", "query": "plan names and prices" }),
        "google_search" => json!({ "query": "rust model context protocol" }),
        "create_api_key" => json!({ "admin_token": "admin-secret", "name": "ci" }),
        "revoke_api_key" => json!({ "admin_token": "admin-secret", "api_key": "fd_live_123" }),
        "list_user_api_keys" => json!({ "user_id": "user-42" }),
        _ => json!({}),
    };
    args.as_object().cloned().unwrap_or_default()
}
