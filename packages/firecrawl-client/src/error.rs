use thiserror::Error;

pub type Result<T> = std::result::Result<T, FirecrawlError>;

#[derive(Debug, Error)]
pub enum FirecrawlError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response (bad key, quota, unreachable page)
    #[error("Firecrawl API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response with `success: false`
    #[error("Firecrawl scrape failed: {0}")]
    ScrapeFailed(String),

    /// Response is missing a field the caller asked for
    #[error("missing field in Firecrawl response: {0}")]
    MissingField(&'static str),
}
