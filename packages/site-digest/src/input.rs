//! Input collector: one website URL from the operator.

use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::error::{PipelineError, Result};

pub const PROMPT: &str = "Enter a website url: ";

/// A URL the operator typed, checked at the boundary.
///
/// Keeps the text exactly as typed; that text is what the sinks record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteUrl(String);

impl WebsiteUrl {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| PipelineError::InvalidUrl {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        if input.trim().is_empty() {
            return Err(invalid("no url entered"));
        }
        if input.trim() != input {
            return Err(invalid("surrounding whitespace"));
        }

        let parsed = Url::parse(input).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host"));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WebsiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Show the prompt and read one line. Only the line terminator is removed.
pub async fn read_line<R, W>(reader: &mut R, writer: &mut W) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).await?;
    if read == 0 {
        return Err(PipelineError::Input(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stdin closed before a url was entered",
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Prompt, read, validate.
pub async fn read_website_url<R, W>(reader: &mut R, writer: &mut W) -> Result<WebsiteUrl>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let line = read_line(reader, writer).await?;
    WebsiteUrl::parse(&line)
}
