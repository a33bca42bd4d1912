//! Fetch -> summarize -> publish, for one URL.

use tracing::info;

use crate::deps::PipelineDeps;
use crate::error::{PipelineError, Result};
use crate::fetch::fetch_content;
use crate::input::WebsiteUrl;
use crate::publish::{publish_all, PublishRecord};
use crate::summarize::summarize;

/// What a successful run wrote, and where.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub record: PublishRecord,
    pub sinks: Vec<String>,
}

pub async fn run(deps: &PipelineDeps, url: &WebsiteUrl) -> Result<PipelineOutcome> {
    let content = fetch_content(deps.scraper.as_ref(), url).await?;
    if content.is_empty() {
        return Err(PipelineError::EmptyContent {
            url: url.to_string(),
        });
    }

    let summary = summarize(deps.ai.as_ref(), &content).await?;

    let record = PublishRecord::new(url, summary);
    let sinks = publish_all(&deps.sinks, &record).await.into_result()?;
    info!(url = %url, sinks = ?sinks, "Pipeline finished");

    Ok(PipelineOutcome { record, sinks })
}
