//! Pure Google Sheets REST API client.
//!
//! Authenticates as a service account and appends rows to a worksheet.
//! The spreadsheet has to be shared with the service account's email.
//!
//! # Example
//!
//! ```rust,ignore
//! use sheets_client::{ServiceAccountKey, SheetsClient};
//!
//! let key = ServiceAccountKey::from_file("creds.json")?;
//! let client = SheetsClient::new(key);
//! client
//!     .append_row("1VarAr...", "Sheet1", &["https://example.com".into(), "summary".into()])
//!     .await?;
//! ```

pub mod auth;
pub mod error;
pub mod types;

pub use auth::{ServiceAccountKey, SPREADSHEETS_SCOPE};
pub use error::{Result, SheetsError};
pub use types::{worksheet_range, AppendResponse, UpdateSummary, ValueInputOption};

use types::ValueRange;

const BASE_URL: &str = "https://sheets.googleapis.com/v4";

pub struct SheetsClient {
    http: reqwest::Client,
    key: ServiceAccountKey,
    base_url: String,
    value_input: ValueInputOption,
}

impl SheetsClient {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            http: reqwest::Client::new(),
            key,
            base_url: BASE_URL.to_string(),
            value_input: ValueInputOption::default(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_value_input(mut self, option: ValueInputOption) -> Self {
        self.value_input = option;
        self
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// Fetch a fresh access token scoped to spreadsheets.
    pub async fn access_token(&self) -> Result<String> {
        auth::fetch_access_token(&self.http, &self.key, SPREADSHEETS_SCOPE).await
    }

    /// Append one row after the last row with data in `worksheet`.
    ///
    /// Every call appends; nothing is deduplicated.
    pub async fn append_row(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        values: &[String],
    ) -> Result<AppendResponse> {
        let token = self.access_token().await?;

        let url = format!(
            "{}/spreadsheets/{}/values/{}:append",
            self.base_url,
            spreadsheet_id,
            urlencoding::encode(&worksheet_range(worksheet))
        );
        let body = ValueRange {
            major_dimension: "ROWS",
            values: vec![values],
        };

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .query(&[
                ("valueInputOption", self.value_input.as_str()),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, spreadsheet_id, worksheet, "Sheets append rejected");
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let appended: AppendResponse = resp.json().await?;
        tracing::debug!(
            updated_range = %appended.updates.updated_range,
            updated_cells = appended.updates.updated_cells,
            "Row appended"
        );
        Ok(appended)
    }
}
