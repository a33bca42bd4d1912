//! Content summarizer: one fixed prompt, one completion.

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::fetch::FetchedContent;
use crate::traits::BaseAI;

/// Placeholder replaced by the page content. Appears exactly once.
pub const WEB_DATA_SLOT: &str = "{web_data}";

pub const SUMMARY_PROMPT: &str = "Given the website data \"{web_data}\" Make sense of the data and provide information about the website.";

/// Generated description of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryText(String);

impl SummaryText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Substitute the content into the slot. The content is not escaped, so
/// braces or quotes in the page pass through untouched.
pub fn render_prompt(content: &FetchedContent) -> String {
    match SUMMARY_PROMPT.split_once(WEB_DATA_SLOT) {
        Some((before, after)) => {
            let mut prompt =
                String::with_capacity(before.len() + content.as_str().len() + after.len());
            prompt.push_str(before);
            prompt.push_str(content.as_str());
            prompt.push_str(after);
            prompt
        }
        None => SUMMARY_PROMPT.to_string(),
    }
}

pub async fn summarize(ai: &dyn BaseAI, content: &FetchedContent) -> Result<SummaryText> {
    let prompt = render_prompt(content);

    info!(prompt_chars = prompt.chars().count(), "Waiting for the model's response...");
    let text = ai.complete(&prompt).await.map_err(PipelineError::Summarize)?;
    info!(summary_chars = text.chars().count(), "Got the result from the model");

    Ok(SummaryText::new(text))
}
