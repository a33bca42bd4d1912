//! Error types for the Sheets client.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetsError>;

#[derive(Debug, Error)]
pub enum SheetsError {
    /// Credential file could not be read
    #[error("failed to read service account file {path}: {source}")]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Credential file is not a service-account key
    #[error("invalid service account key: {0}")]
    CredentialsParse(#[from] serde_json::Error),

    /// Private key unusable or assertion could not be signed
    #[error("failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Token endpoint refused the assertion
    #[error("token exchange failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx from the Sheets API (unknown spreadsheet, missing worksheet, no access)
    #[error("Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },
}
