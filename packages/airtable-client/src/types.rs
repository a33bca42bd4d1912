use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name to cell value.
pub type Fields = Map<String, Value>;

/// Body of `POST /{base}/{table}` for a single record.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest {
    pub fields: Fields,
    /// Let Airtable coerce strings into select options, dates, etc.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub typecast: bool,
}

/// A record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "createdTime")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fields: Fields,
}
