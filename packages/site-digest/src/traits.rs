// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only. Pipeline steps (trim, prompt, fan-out)
// live in their own modules and only talk to services through these.
//
// Naming convention: Base* for trait names

use anyhow::Result;
use async_trait::async_trait;

use crate::publish::PublishRecord;

// =============================================================================
// Web Scraper Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseWebScraper: Send + Sync {
    /// Scrape a single page and return its markdown exactly as the service sent it
    async fn scrape(&self, url: &str) -> Result<String>;
}

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// Record Sink Trait (Infrastructure - write-only stores)
// =============================================================================

#[async_trait]
pub trait BaseRecordSink: Send + Sync {
    /// Short stable name used in logs and failure reports
    fn name(&self) -> &str;

    /// Write one record. Never deduplicates.
    async fn publish(&self, record: &PublishRecord) -> Result<()>;
}
