//! The resolved description of one render invocation.

use std::fmt;
use std::path::PathBuf;

use crate::config::Configuration;

/// Literal `--input` / `--output` value meaning "use the standard stream".
pub const STREAM_SENTINEL: &str = "-";

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// `--string` content, escape sequences not yet decoded.
    Inline(String),
    Stdin,
}

/// Where the rendered SVG goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => f.write_str("standard output"),
        }
    }
}

/// Everything needed to render once. Built by [`crate::options::resolve`].
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub input: InputSource,
    pub output: OutputTarget,
    pub configuration: Configuration,
    pub quiet: bool,
}
