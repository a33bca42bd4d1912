//! Typed errors raised by the pipeline itself.
//!
//! Failures inside a collaborator (network, auth, bad responses) travel as
//! `anyhow::Error` with context attached at the step that called it.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Operator input rejected before any service is called
    #[error("invalid website url {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("failed to read website url: {0}")]
    Input(#[from] std::io::Error),

    #[error("scraping {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// Scrape succeeded but the page had no text to summarize
    #[error("scraped content for {url} is empty; nothing to summarize")]
    EmptyContent { url: String },

    #[error("summarization failed")]
    Summarize(#[source] anyhow::Error),

    #[error(transparent)]
    Publish(#[from] PublishFailure),
}

/// One or more sinks failed. Sinks that succeeded are listed because their
/// writes are already committed.
#[derive(Debug)]
pub struct PublishFailure {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, anyhow::Error)>,
}

impl fmt::Display for PublishFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "publishing failed for ")?;
        for (i, (sink, err)) in self.failed.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{sink} ({err:#})")?;
        }
        if !self.succeeded.is_empty() {
            write!(f, "; already written to {}", self.succeeded.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for PublishFailure {}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_failure_names_each_sink() {
        let failure = PublishFailure {
            succeeded: vec!["airtable".into()],
            failed: vec![(
                "google_sheets".into(),
                anyhow::anyhow!("403").context("append rejected"),
            )],
        };

        assert_eq!(
            failure.to_string(),
            "publishing failed for google_sheets (append rejected: 403); already written to airtable"
        );
    }

    #[test]
    fn test_both_failed() {
        let failure = PublishFailure {
            succeeded: vec![],
            failed: vec![
                ("google_sheets".into(), anyhow::anyhow!("a")),
                ("airtable".into(), anyhow::anyhow!("b")),
            ],
        };

        assert_eq!(
            failure.to_string(),
            "publishing failed for google_sheets (a); airtable (b)"
        );
    }
}
