//! Error types for ifgc-core.

use std::path::PathBuf;

use thiserror::Error;

/// Every way a render invocation can fail. All variants are terminal.
#[derive(Debug, Error)]
pub enum IfgcError {
    /// `--input` and `--string` were both supplied.
    #[error("Cannot use both --input and --string options. Please use one.")]
    ConflictingInput,

    /// The input file does not exist or cannot be opened.
    #[error("Input file \"{}\" doesn't exist", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing, unreadable, or not a JSON object.
    #[error("Configuration file \"{}\" is invalid or doesn't exist: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// The resolved document is empty or whitespace-only.
    #[error("No input data provided")]
    EmptyInput,

    /// Reading the document body failed part-way.
    #[error("Failed to read {origin}")]
    InputStream {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The renderer rejected the document.
    #[error("Failed to render: {0}")]
    Render(String),

    /// The payload could not be persisted.
    #[error("Failed to write {target}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn write_err(target: impl Into<String>, source: std::io::Error) -> IfgcError {
    IfgcError::Write {
        target: target.into(),
        source,
    }
}
