//! Pipeline dependencies (using traits for testability)
//!
//! Every external service sits behind a Base* trait; `PipelineDeps` holds
//! one implementation of each and is built once from `Config`.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use firecrawl_client::FirecrawlClient;
use openai_client::{ChatRequest, Message, OpenAIClient};
use tracing::info;

use crate::config::Config;
use crate::publish::{SpreadsheetSink, TableSink};
use crate::traits::{BaseAI, BaseRecordSink, BaseWebScraper};

// =============================================================================
// FirecrawlClient Adapter (implements BaseWebScraper trait)
// =============================================================================

pub struct FirecrawlAdapter(pub FirecrawlClient);

impl FirecrawlAdapter {
    pub fn new(api_key: &str) -> Self {
        info!("Authenticating Firecrawl...");
        let client = FirecrawlClient::new(api_key);
        info!("Authenticated Firecrawl.");
        Self(client)
    }
}

#[async_trait]
impl BaseWebScraper for FirecrawlAdapter {
    async fn scrape(&self, url: &str) -> Result<String> {
        Ok(self.0.scrape_markdown(url).await?)
    }
}

// =============================================================================
// OpenAIClient Adapter (implements BaseAI trait)
// =============================================================================

/// Single-turn completions at temperature 0.
pub struct OpenAIAdapter {
    client: OpenAIClient,
    model: String,
}

impl OpenAIAdapter {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        info!(model = %config.openai_model, "Authenticating OpenAI...");
        let adapter = Self::new(
            OpenAIClient::new(config.openai_api_key.clone()),
            config.openai_model.clone(),
        );
        info!("Authenticated OpenAI.");
        adapter
    }

    /// The exact request `complete` sends.
    pub fn request_for(&self, prompt: &str) -> ChatRequest {
        ChatRequest::new(&self.model)
            .message(Message::user(prompt))
            .temperature(0.0)
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self.client.chat_completion(self.request_for(prompt)).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI usage"
            );
        }
        Ok(response.content)
    }
}

// =============================================================================
// PipelineDeps
// =============================================================================

#[derive(Clone)]
pub struct PipelineDeps {
    pub scraper: Arc<dyn BaseWebScraper>,
    pub ai: Arc<dyn BaseAI>,
    /// Written concurrently, in no particular order
    pub sinks: Vec<Arc<dyn BaseRecordSink>>,
}

impl PipelineDeps {
    pub fn new(
        scraper: Arc<dyn BaseWebScraper>,
        ai: Arc<dyn BaseAI>,
        sinks: Vec<Arc<dyn BaseRecordSink>>,
    ) -> Self {
        Self { scraper, ai, sinks }
    }

    /// Production wiring. Fails early if the service-account file is unreadable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let scraper = FirecrawlAdapter::new(&config.firecrawl_api_key);
        let ai = OpenAIAdapter::from_config(config);
        let sheets = SpreadsheetSink::from_config(config)?;
        let airtable = TableSink::from_config(config);

        Ok(Self::new(
            Arc::new(scraper),
            Arc::new(ai),
            vec![Arc::new(sheets), Arc::new(airtable)],
        ))
    }
}
