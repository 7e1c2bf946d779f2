//! Input acquisition: turn an [`InputSource`] into document text.

use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::IfgcError;
use crate::request::InputSource;

/// Read the document body and reject empty or whitespace-only text.
pub async fn acquire(source: &InputSource) -> Result<String, IfgcError> {
    let text = match source {
        InputSource::Inline(raw) => decode_escapes(raw),
        InputSource::File(path) => read_file(path).await?,
        InputSource::Stdin => read_stdin().await?,
    };

    if text.trim().is_empty() {
        return Err(IfgcError::EmptyInput);
    }
    tracing::debug!(bytes = text.len(), "acquired document");
    Ok(text)
}

/// Decode the literal two-character sequences `\n` and `\t` typed on the
/// command line. No other escapes are recognized.
pub fn decode_escapes(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\t", "\t")
}

async fn read_file(path: &Path) -> Result<String, IfgcError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IfgcError::InputStream {
            origin: format!("input file \"{}\"", path.display()),
            source,
        })
}

async fn read_stdin() -> Result<String, IfgcError> {
    read_lines(BufReader::new(tokio::io::stdin()))
        .await
        .map_err(|source| IfgcError::InputStream {
            origin: "standard input".to_string(),
            source,
        })
}

/// Drain `reader` line by line, terminating every line (the last one
/// included) with `\n`.
pub async fn read_lines<R>(reader: R) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut data = String::new();
    while let Some(line) = lines.next_line().await? {
        data.push_str(&line);
        data.push('\n');
    }
    Ok(data)
}
