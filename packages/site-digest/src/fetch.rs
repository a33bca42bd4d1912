//! Content fetcher: scrape one page and trim it.

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::input::WebsiteUrl;
use crate::traits::BaseWebScraper;

/// Page markdown with surrounding whitespace removed. May be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContent(String);

impl FetchedContent {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub async fn fetch_content(scraper: &dyn BaseWebScraper, url: &WebsiteUrl) -> Result<FetchedContent> {
    info!(url = %url, "Started scraping the website...");
    let raw = scraper
        .scrape(url.as_str())
        .await
        .map_err(|source| PipelineError::Fetch {
            url: url.to_string(),
            source,
        })?;
    info!(url = %url, bytes = raw.len(), "Finished scraping.");

    Ok(FetchedContent::new(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_dependencies::MockWebScraper;

    fn url() -> WebsiteUrl {
        WebsiteUrl::parse("https://example.com").unwrap()
    }

    #[tokio::test]
    async fn test_trims_markdown() {
        let scraper = MockWebScraper::new().with_response("  Hello World  ");

        let content = fetch_content(&scraper, &url()).await.unwrap();

        assert_eq!(content.as_str(), "Hello World");
        assert_eq!(scraper.scrape_calls(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_trim_is_idempotent() {
        let once = FetchedContent::new("\n\t# Title\n\nbody  \n");
        let twice = FetchedContent::new(once.as_str());
        assert_eq!(once, twice);
        assert_eq!(once.as_str(), "# Title\n\nbody");
    }

    #[tokio::test]
    async fn test_whitespace_only_page_is_empty() {
        let scraper = MockWebScraper::new().with_response(" \n\n ");
        let content = fetch_content(&scraper, &url()).await.unwrap();
        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn test_scrape_error_is_fetch_error() {
        let scraper = MockWebScraper::new().with_error("401 Unauthorized");

        let err = fetch_content(&scraper, &url()).await.unwrap_err();

        match err {
            PipelineError::Fetch { url, source } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(source.to_string(), "401 Unauthorized");
            }
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }
}
