//! Pure Airtable REST API client.
//!
//! Only record creation is covered; that is all a write-only sink needs.
//!
//! # Example
//!
//! ```rust,ignore
//! use airtable_client::{AirtableClient, Fields};
//!
//! let client = AirtableClient::new("pat...".into());
//! let mut fields = Fields::new();
//! fields.insert("Name".into(), "Ada".into());
//! let record = client.create_record("appXXXX", "tblYYYY", fields).await?;
//! println!("created {}", record.id);
//! ```

pub mod error;
pub mod types;

pub use error::{AirtableError, Result};
pub use types::{CreateRecordRequest, Fields, Record};

const BASE_URL: &str = "https://api.airtable.com/v0";

pub struct AirtableClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AirtableClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create one record in `table_id` of `base_id`. Table names work in
    /// place of ids and are percent-encoded.
    pub async fn create_record(
        &self,
        base_id: &str,
        table_id: &str,
        fields: Fields,
    ) -> Result<Record> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            base_id,
            urlencoding::encode(table_id)
        );
        let body = CreateRecordRequest {
            fields,
            typecast: false,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, base_id, table_id, "Airtable create rejected");
            return Err(AirtableError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let record: Record = resp.json().await?;
        tracing::debug!(record_id = %record.id, base_id, table_id, "Airtable record created");
        Ok(record)
    }
}
