//! Scrape a web page, summarize it with an LLM, and record the summary in
//! a Google Sheet and an Airtable table.
//!
//! The run is strictly sequential up to the summary; the two writes then
//! happen concurrently and are both awaited.

pub mod config;
pub mod deps;
pub mod error;
pub mod fetch;
pub mod input;
pub mod pipeline;
pub mod publish;
pub mod summarize;
pub mod test_dependencies;
pub mod traits;

pub use config::Config;
pub use deps::PipelineDeps;
pub use error::{PipelineError, PublishFailure};
pub use fetch::FetchedContent;
pub use input::WebsiteUrl;
pub use pipeline::{run, PipelineOutcome};
pub use publish::{publish_all, PublishRecord, PublishReport};
pub use summarize::SummaryText;
pub use test_dependencies::TestDependencies;
pub use traits::*;
