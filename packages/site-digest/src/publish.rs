//! Result publishers: the same record goes to every sink concurrently.

use std::path::Path;
use std::sync::Arc;

use airtable_client::{AirtableClient, Fields};
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::join_all;
use sheets_client::{ServiceAccountKey, SheetsClient};
use tracing::{error, info};

use crate::config::Config;
use crate::error::PublishFailure;
use crate::input::WebsiteUrl;
use crate::summarize::SummaryText;
use crate::traits::BaseRecordSink;

/// The pair every sink writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRecord {
    pub website: String,
    pub summary: String,
}

impl PublishRecord {
    pub fn new(website: &WebsiteUrl, summary: SummaryText) -> Self {
        Self {
            website: website.as_str().to_string(),
            summary: summary.into_inner(),
        }
    }
}

// =============================================================================
// Spreadsheet sink (Google Sheets)
// =============================================================================

/// Appends `[website, summary]` as a new row.
pub struct SpreadsheetSink {
    client: SheetsClient,
    spreadsheet_id: String,
    worksheet: String,
}

impl SpreadsheetSink {
    pub fn new(client: SheetsClient, spreadsheet_id: String, worksheet: String) -> Self {
        Self {
            client,
            spreadsheet_id,
            worksheet,
        }
    }

    /// Load the service-account key named in the config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let key = load_key(&config.google_credentials_file)?;
        Ok(Self::new(
            SheetsClient::new(key),
            config.spreadsheet_id.clone(),
            config.worksheet.clone(),
        ))
    }
}

fn load_key(path: &Path) -> Result<ServiceAccountKey> {
    ServiceAccountKey::from_file(path)
        .with_context(|| format!("loading Google service account from {}", path.display()))
}

#[async_trait]
impl BaseRecordSink for SpreadsheetSink {
    fn name(&self) -> &str {
        "google_sheets"
    }

    async fn publish(&self, record: &PublishRecord) -> Result<()> {
        info!(
            spreadsheet_id = %self.spreadsheet_id,
            worksheet = %self.worksheet,
            client_email = %self.client.client_email(),
            "Connecting to Google sheets..."
        );
        self.client
            .append_row(
                &self.spreadsheet_id,
                &self.worksheet,
                &[record.website.clone(), record.summary.clone()],
            )
            .await
            .context("appending row to Google Sheets")?;
        Ok(())
    }
}

// =============================================================================
// Table sink (Airtable)
// =============================================================================

pub const WEBSITE_FIELD: &str = "Website";
pub const INFO_FIELD: &str = "Info";

/// Creates a record with `Website` and `Info` fields.
pub struct TableSink {
    client: AirtableClient,
    base_id: String,
    table_id: String,
}

impl TableSink {
    pub fn new(client: AirtableClient, base_id: String, table_id: String) -> Self {
        Self {
            client,
            base_id,
            table_id,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AirtableClient::new(config.airtable_api_key.clone()),
            config.airtable_base_id.clone(),
            config.airtable_table_id.clone(),
        )
    }
}

pub fn record_fields(record: &PublishRecord) -> Fields {
    let mut fields = Fields::new();
    fields.insert(WEBSITE_FIELD.to_string(), record.website.clone().into());
    fields.insert(INFO_FIELD.to_string(), record.summary.clone().into());
    fields
}

#[async_trait]
impl BaseRecordSink for TableSink {
    fn name(&self) -> &str {
        "airtable"
    }

    async fn publish(&self, record: &PublishRecord) -> Result<()> {
        let created = self
            .client
            .create_record(&self.base_id, &self.table_id, record_fields(record))
            .await
            .context("creating Airtable record")?;
        info!(record_id = %created.id, "Airtable record created");
        Ok(())
    }
}

// =============================================================================
// Fan-out
// =============================================================================

/// How one sink fared.
#[derive(Debug)]
pub struct SinkOutcome {
    pub sink: String,
    pub result: Result<()>,
}

/// Outcomes in the order the sinks were given.
#[derive(Debug)]
pub struct PublishReport {
    pub outcomes: Vec<SinkOutcome>,
}

impl PublishReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Names of the sinks that succeeded, or every failure.
    pub fn into_result(self) -> std::result::Result<Vec<String>, PublishFailure> {
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for outcome in self.outcomes {
            match outcome.result {
                Ok(()) => succeeded.push(outcome.sink),
                Err(e) => failed.push((outcome.sink, e)),
            }
        }

        if failed.is_empty() {
            Ok(succeeded)
        } else {
            Err(PublishFailure { succeeded, failed })
        }
    }
}

/// Spawn one task per sink and wait for all of them.
///
/// A failing or panicking sink never cancels the others.
pub async fn publish_all(sinks: &[Arc<dyn BaseRecordSink>], record: &PublishRecord) -> PublishReport {
    let handles: Vec<_> = sinks
        .iter()
        .map(|sink| {
            let sink = Arc::clone(sink);
            let record = record.clone();
            tokio::spawn(async move { sink.publish(&record).await })
        })
        .collect();

    let joined = join_all(handles).await;

    let outcomes = sinks
        .iter()
        .zip(joined)
        .map(|(sink, joined)| {
            let result = joined
                .map_err(|e| anyhow::anyhow!("sink task aborted: {e}"))
                .and_then(|r| r);
            match &result {
                Ok(()) => info!(sink = sink.name(), "Result has been saved."),
                Err(e) => error!(sink = sink.name(), error = %format!("{e:#}"), "Saving result failed"),
            }
            SinkOutcome {
                sink: sink.name().to_string(),
                result,
            }
        })
        .collect();

    PublishReport { outcomes }
}
