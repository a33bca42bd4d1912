use serde::{Deserialize, Serialize};

/// How the API interprets appended values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueInputOption {
    /// Stored exactly as given
    #[default]
    Raw,
    /// Parsed as if typed into the UI (formulas, dates, numbers)
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::UserEntered => "USER_ENTERED",
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ValueRange<'a> {
    #[serde(rename = "majorDimension")]
    pub major_dimension: &'static str,
    pub values: Vec<&'a [String]>,
}

/// Response of `values:append`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppendResponse {
    #[serde(rename = "spreadsheetId")]
    pub spreadsheet_id: String,
    #[serde(rename = "tableRange", default)]
    pub table_range: Option<String>,
    pub updates: UpdateSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSummary {
    #[serde(rename = "updatedRange")]
    pub updated_range: String,
    #[serde(rename = "updatedRows", default)]
    pub updated_rows: u32,
    #[serde(rename = "updatedCells", default)]
    pub updated_cells: u32,
}

/// A1 range naming a whole worksheet. Titles are always quoted so names
/// with spaces or that look like cell references resolve to the sheet.
pub fn worksheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet_range_quotes_title() {
        assert_eq!(worksheet_range("Sheet1"), "'Sheet1'");
        assert_eq!(worksheet_range("Bob's sites"), "'Bob''s sites'");
    }

    #[test]
    fn test_value_input_option_default_is_raw() {
        assert_eq!(ValueInputOption::default().as_str(), "RAW");
    }
}
