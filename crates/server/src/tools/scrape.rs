//! Website scrape, crawl and structured extraction tools.

use friday_client::ApiRequest;
use friday_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{require_non_empty, require_range, require_url};
use crate::dispatch::ToolInput;

/// Content formats the upstream scraper can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Html,
    Markdown,
    Links,
    Text,
}

/// Input parameters for scrape_website.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScrapeParams {
    /// The URL of the page to scrape.
    pub url: String,

    /// Content formats to return (default ["html"]).
    #[serde(default = "default_scrape_formats")]
    pub formats: Vec<ContentFormat>,
}

fn default_scrape_formats() -> Vec<ContentFormat> {
    vec![ContentFormat::Html]
}

impl ToolInput for ScrapeParams {
    fn validate(&self) -> Result<(), Error> {
        require_url("url", &self.url)?;
        require_formats(&self.formats)
    }

    fn into_request(self) -> ApiRequest {
        ApiRequest::new().json(json!({ "url": self.url.trim(), "formats": self.formats }))
    }
}

/// Input parameters for crawl_website.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CrawlParams {
    /// The URL to start crawling from.
    pub url: String,

    /// Content formats to return for each page (default ["html", "markdown", "links"]).
    #[serde(default = "default_crawl_formats")]
    pub formats: Vec<ContentFormat>,

    /// Maximum number of pages to visit (1-100, default 10).
    #[serde(default = "default_max_pages")]
    #[schemars(range(min = 1, max = 100))]
    pub max_pages: u32,
}

fn default_crawl_formats() -> Vec<ContentFormat> {
    vec![ContentFormat::Html, ContentFormat::Markdown, ContentFormat::Links]
}

fn default_max_pages() -> u32 {
    10
}

impl ToolInput for CrawlParams {
    fn validate(&self) -> Result<(), Error> {
        require_url("url", &self.url)?;
        require_formats(&self.formats)?;
        require_range("max_pages", self.max_pages, 1, 100)
    }

    fn into_request(self) -> ApiRequest {
        ApiRequest::new().json(json!({
            "url": self.url.trim(),
            "formats": self.formats,
            "max_pages": self.max_pages,
        }))
    }
}

/// Input parameters for extract_structured_data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractParams {
    /// The URL of the page to extract data from.
    pub url: String,

    /// What to extract, in plain language.
    pub query: String,

    /// Optional description of the desired output structure (a JSON Schema or example object).
    #[serde(default)]
    pub custom_schema: Option<Value>,
}

impl ToolInput for ExtractParams {
    fn validate(&self) -> Result<(), Error> {
        require_url("url", &self.url)?;
        require_non_empty("query", &self.query)
    }

    fn into_request(self) -> ApiRequest {
        let mut body = json!({ "url": self.url.trim(), "query": self.query });
        if let Some(schema) = self.custom_schema {
            body["custom_schema"] = schema;
        }
        ApiRequest::new().json(body)
    }
}

fn require_formats(formats: &[ContentFormat]) -> Result<(), Error> {
    if formats.is_empty() {
        return Err(Error::InvalidInput("formats must list at least one format".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_defaults_to_html() {
        let params: ScrapeParams = serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();
        assert_eq!(params.formats, vec![ContentFormat::Html]);
        assert_eq!(params.into_request().body, Some(json!({ "url": "https://example.com", "formats": ["html"] })));
    }

    #[test]
    fn test_scrape_rejects_unknown_format() {
        let result = serde_json::from_value::<ScrapeParams>(json!({ "url": "https://example.com", "formats": ["pdf"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_scrape_rejects_empty_formats() {
        let params = ScrapeParams { url: "https://example.com".into(), formats: vec![] };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_crawl_defaults() {
        let params: CrawlParams = serde_json::from_value(json!({ "url": "https://example.com/docs" })).unwrap();
        assert!(params.validate().is_ok());
        assert_eq!(
            params.into_request().body,
            Some(json!({
                "url": "https://example.com/docs",
                "formats": ["html", "markdown", "links"],
                "max_pages": 10,
            }))
        );
    }

    #[test]
    fn test_crawl_max_pages_bounds() {
        let params: CrawlParams =
            serde_json::from_value(json!({ "url": "https://example.com", "max_pages": 0 })).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_extract_omits_absent_schema() {
        let params: ExtractParams =
            serde_json::from_value(json!({ "url": "https://example.com", "query": "prices" })).unwrap();
        assert_eq!(params.into_request().body, Some(json!({ "url": "https://example.com", "query": "prices" })));
    }

    #[test]
    fn test_extract_forwards_schema() {
        let schema = json!({ "type": "object", "properties": { "price": { "type": "number" } } });
        let params: ExtractParams = serde_json::from_value(json!({
            "url": "https://example.com",
            "query": "prices",
            "custom_schema": schema,
        }))
        .unwrap();

        let body = params.into_request().body.unwrap();
        assert_eq!(body["custom_schema"], schema);
    }

    #[test]
    fn test_extract_requires_query() {
        let params = ExtractParams { url: "https://example.com".into(), query: "  ".into(), custom_schema: None };
        assert!(matches!(params.validate(), Err(Error::InvalidInput(_))));
    }
}
