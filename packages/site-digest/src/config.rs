use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_CREDENTIALS_FILE: &str = "creds.json";
pub const DEFAULT_SPREADSHEET_ID: &str = "1VarAr4qbBgM-0ixXa_-GrlDMy3y6bTz1EDipnAqps1E";
pub const DEFAULT_WORKSHEET: &str = "Sheet1";
pub const DEFAULT_AIRTABLE_BASE_ID: &str = "app91Xn5ozfJumoDi";
pub const DEFAULT_AIRTABLE_TABLE_ID: &str = "tblQOUjnjIU5MWXPM";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub firecrawl_api_key: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub airtable_api_key: String,
    pub airtable_base_id: String,
    pub airtable_table_id: String,
    pub google_credentials_file: PathBuf,
    pub spreadsheet_id: String,
    pub worksheet: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory wins over variables already
    /// set in the shell.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv_override();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name -> value lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let or_default = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            firecrawl_api_key: get("FIRECRAWL_API").context("FIRECRAWL_API must be set")?,
            openai_api_key: get("OPENAI_API").context("OPENAI_API must be set")?,
            openai_model: or_default("OPENAI_MODEL", DEFAULT_MODEL),
            airtable_api_key: get("AIRTABLE_API_KEY").context("AIRTABLE_API_KEY must be set")?,
            airtable_base_id: or_default("AIRTABLE_BASE_ID", DEFAULT_AIRTABLE_BASE_ID),
            airtable_table_id: or_default("AIRTABLE_TABLE_ID", DEFAULT_AIRTABLE_TABLE_ID),
            google_credentials_file: PathBuf::from(or_default(
                "GOOGLE_CREDENTIALS_FILE",
                DEFAULT_CREDENTIALS_FILE,
            )),
            spreadsheet_id: or_default("SPREADSHEET_ID", DEFAULT_SPREADSHEET_ID),
            worksheet: or_default("WORKSHEET_NAME", DEFAULT_WORKSHEET),
        })
    }
}
