use serde::{Deserialize, Serialize};

/// Output formats accepted by `/scrape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrapeFormat {
    Markdown,
    Html,
    RawHtml,
    Links,
}

/// Body of `POST /scrape`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub formats: Vec<ScrapeFormat>,
    #[serde(rename = "onlyMainContent", skip_serializing_if = "Option::is_none")]
    pub only_main_content: Option<bool>,
}

impl ScrapeRequest {
    /// Single-page markdown scrape, the service's default content handling.
    pub fn markdown(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            formats: vec![ScrapeFormat::Markdown],
            only_main_content: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ScrapeResponse {
    pub success: bool,
    pub error: Option<String>,
    pub data: Option<ScrapeData>,
}

/// Page content returned by a scrape.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeData {
    pub markdown: Option<String>,
    pub html: Option<String>,
    pub metadata: Option<PageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
}
