//! Pure Firecrawl REST API client.
//!
//! Covers the single-page `/scrape` endpoint. Firecrawl renders the page
//! (JavaScript included) and hands back normalized markdown.
//!
//! # Example
//!
//! ```rust,ignore
//! use firecrawl_client::FirecrawlClient;
//!
//! let client = FirecrawlClient::new("fc-...");
//! let markdown = client.scrape_markdown("https://example.com").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{FirecrawlError, Result};
pub use types::{PageMetadata, ScrapeData, ScrapeFormat, ScrapeRequest};

use types::ScrapeResponse;

const BASE_URL: &str = "https://api.firecrawl.dev/v1";

pub struct FirecrawlClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FirecrawlClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a self-hosted instance or a test server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Scrape one URL and return whatever formats were requested.
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeData> {
        let url = format!("{}/scrape", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, url = %request.url, "Firecrawl scrape rejected");
            return Err(FirecrawlError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let scraped: ScrapeResponse = resp.json().await?;
        if !scraped.success {
            return Err(FirecrawlError::ScrapeFailed(
                scraped.error.unwrap_or_else(|| "no error message".to_string()),
            ));
        }

        let data = scraped.data.ok_or(FirecrawlError::MissingField("data"))?;
        if let Some(code) = data.metadata.as_ref().and_then(|m| m.status_code) {
            tracing::debug!(url = %request.url, status_code = code, "Page fetched by Firecrawl");
        }

        Ok(data)
    }

    /// Scrape one URL as markdown. The markdown is returned as sent, untrimmed.
    pub async fn scrape_markdown(&self, url: &str) -> Result<String> {
        self.scrape(&ScrapeRequest::markdown(url))
            .await?
            .markdown
            .ok_or(FirecrawlError::MissingField("markdown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_markdown_request_shape() {
        let body = serde_json::to_value(ScrapeRequest::markdown("https://example.com")).unwrap();
        assert_eq!(
            body,
            json!({"url": "https://example.com", "formats": ["markdown"]})
        );
    }

    #[tokio::test]
    async fn test_scrape_markdown_returns_raw_markdown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/scrape"))
            .and(header("authorization", "Bearer fc-test"))
            .and(body_json(json!({"url": "https://example.com", "formats": ["markdown"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "markdown": "  # Example\n\n",
                    "metadata": {"title": "Example", "sourceURL": "https://example.com", "statusCode": 200}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("fc-test").with_base_url(server.uri());
        let markdown = client.scrape_markdown("https://example.com").await.unwrap();

        assert_eq!(markdown, "  # Example\n\n");
    }

    #[tokio::test]
    async fn test_unsuccessful_scrape_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": "site unreachable"
            })))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("fc-test").with_base_url(server.uri());
        let err = client.scrape_markdown("https://down.example").await.unwrap_err();

        match err {
            FirecrawlError::ScrapeFailed(msg) => assert_eq!(msg, "site unreachable"),
            other => panic!("expected ScrapeFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_markdown_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"metadata": {"title": "No body"}}
            })))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("fc-test").with_base_url(server.uri());
        let err = client.scrape_markdown("https://example.com").await.unwrap_err();

        assert!(matches!(err, FirecrawlError::MissingField("markdown")));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized: Invalid token"))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("bad-key").with_base_url(server.uri());
        let err = client.scrape_markdown("https://example.com").await.unwrap_err();

        assert!(matches!(err, FirecrawlError::Api { status: 401, .. }));
    }
}
