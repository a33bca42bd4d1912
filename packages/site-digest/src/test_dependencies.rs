// Test doubles for the Base* traits
//
// Each mock records its calls behind an Arc so a clone kept by the test
// sees what the pipeline did with the one it was handed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::deps::PipelineDeps;
use crate::publish::PublishRecord;
use crate::traits::{BaseAI, BaseRecordSink, BaseWebScraper};

// =============================================================================
// MockWebScraper
// =============================================================================

#[derive(Clone, Default)]
pub struct MockWebScraper {
    responses: Arc<Mutex<Vec<std::result::Result<String, String>>>>,
    scrape_calls: Arc<Mutex<Vec<String>>>,
}

impl MockWebScraper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue markdown for the next scrape
    pub fn with_response(self, markdown: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(markdown.to_string()));
        self
    }

    /// Queue a failure for the next scrape
    pub fn with_error(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    pub fn scrape_calls(&self) -> Vec<String> {
        self.scrape_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseWebScraper for MockWebScraper {
    async fn scrape(&self, url: &str) -> Result<String> {
        self.scrape_calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok("# Mock Content\n\nThis is mock scraped content.".to_string());
        }
        responses.remove(0).map_err(|e| anyhow::anyhow!(e))
    }
}

// =============================================================================
// MockAI
// =============================================================================

#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<Vec<std::result::Result<String, String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(text.to_string()));
        self
    }

    pub fn with_error(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    /// Every prompt received, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok("Mock summary.".to_string());
        }
        responses.remove(0).map_err(|e| anyhow::anyhow!(e))
    }
}

// =============================================================================
// MockRecordSink
// =============================================================================

#[derive(Clone)]
pub struct MockRecordSink {
    name: String,
    failure: Option<String>,
    panics: bool,
    delay: Option<Duration>,
    published: Arc<Mutex<Vec<PublishRecord>>>,
}

impl MockRecordSink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            failure: None,
            panics: false,
            delay: None,
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record the call, then fail with `message`
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Record the call, then panic
    pub fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }

    /// Sleep before recording, to let the other sinks finish first
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn published(&self) -> Vec<PublishRecord> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseRecordSink for MockRecordSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn publish(&self, record: &PublishRecord) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.published.lock().unwrap().push(record.clone());

        if self.panics {
            panic!("{} sink panicked", self.name);
        }
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock set with handles kept for assertions.
pub struct TestDependencies {
    pub web_scraper: MockWebScraper,
    pub ai: MockAI,
    pub spreadsheet: MockRecordSink,
    pub table: MockRecordSink,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            web_scraper: MockWebScraper::new(),
            ai: MockAI::new(),
            spreadsheet: MockRecordSink::new("google_sheets"),
            table: MockRecordSink::new("airtable"),
        }
    }

    pub fn mock_scraper(mut self, scraper: MockWebScraper) -> Self {
        self.web_scraper = scraper;
        self
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = ai;
        self
    }

    pub fn mock_spreadsheet(mut self, sink: MockRecordSink) -> Self {
        self.spreadsheet = sink;
        self
    }

    pub fn mock_table(mut self, sink: MockRecordSink) -> Self {
        self.table = sink;
        self
    }

    /// Wire clones of the mocks into a `PipelineDeps`
    pub fn deps(&self) -> PipelineDeps {
        PipelineDeps::new(
            Arc::new(self.web_scraper.clone()),
            Arc::new(self.ai.clone()),
            vec![
                Arc::new(self.spreadsheet.clone()),
                Arc::new(self.table.clone()),
            ],
        )
    }
}
