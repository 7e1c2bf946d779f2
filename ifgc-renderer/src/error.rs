//! Error types for ifgc-renderer.

use thiserror::Error;

/// All errors that can arise while turning a document into SVG.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document text is malformed.
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// No `infographic <template>` line was found.
    #[error("missing `infographic <template>` header")]
    MissingTemplate,

    #[error("unknown template '{0}'; run `ifgc template` to list available templates")]
    UnknownTemplate(String),

    #[error("unknown theme '{name}'; expected one of: {}", expected.join(", "))]
    UnknownTheme {
        name: String,
        expected: &'static [&'static str],
    },

    /// A configuration key holds a value of the wrong JSON type.
    #[error("configuration key '{key}' must be {expected}")]
    InvalidOption { key: String, expected: &'static str },

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}

pub(crate) fn syntax(line: usize, message: impl Into<String>) -> RenderError {
    RenderError::Syntax {
        line,
        message: message.into(),
    }
}
