//! Option resolution: raw CLI flags in, validated [`RenderRequest`] out.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{ConfigLayers, Configuration};
use crate::error::IfgcError;
use crate::request::{InputSource, OutputTarget, RenderRequest, STREAM_SENTINEL};

/// Output file used when neither `--output` nor an input file is given.
pub const FALLBACK_OUTPUT: &str = "out.svg";

/// Input extensions replaced (rather than extended) by `.svg`.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["ifgc", "info", "txt"];

/// Device path treated the same as the `-` output sentinel.
const STDOUT_DEVICE: &str = "/dev/stdout";

/// Flags of the default render action, exactly as the user supplied them.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub input: Option<String>,
    pub string: Option<String>,
    pub output: Option<String>,
    pub config: Option<PathBuf>,
    pub theme: Option<String>,
    pub background: Option<String>,
    pub quiet: bool,
}

/// Validate flags, load the configuration layers, and pick the output target.
///
/// Checks run in a fixed order: conflicting inputs (no I/O yet), input file
/// presence, configuration file. The first failure is returned.
pub async fn resolve(options: RenderOptions) -> Result<RenderRequest, IfgcError> {
    if options.input.is_some() && options.string.is_some() {
        return Err(IfgcError::ConflictingInput);
    }

    let input_file = options
        .input
        .as_deref()
        .filter(|input| *input != STREAM_SENTINEL)
        .map(PathBuf::from);

    if let Some(path) = input_file.as_deref() {
        ensure_readable(path).await?;
    }

    let base = match options.config.as_deref() {
        Some(path) => Configuration::load(path).await?,
        None => Configuration::new(),
    };
    let configuration = ConfigLayers::with_flag_overrides(
        base,
        options.theme.as_deref(),
        options.background.as_deref(),
    )
    .merge();

    let output = match options.output.as_deref() {
        Some(STREAM_SENTINEL) | Some(STDOUT_DEVICE) => OutputTarget::Stdout,
        Some(path) => OutputTarget::File(PathBuf::from(path)),
        None => OutputTarget::File(default_output(input_file.as_deref())),
    };

    let input = match (options.string, input_file) {
        (Some(text), _) => InputSource::Inline(text),
        (None, Some(path)) => InputSource::File(path),
        (None, None) => InputSource::Stdin,
    };

    tracing::debug!(?input, %output, config_keys = configuration.len(), "resolved render request");

    Ok(RenderRequest {
        input,
        output,
        configuration,
        quiet: options.quiet,
    })
}

/// Output path derived from the input file: a recognized document extension
/// is swapped for `.svg`, anything else gets `.svg` appended.
pub fn default_output(input: Option<&Path>) -> PathBuf {
    let Some(input) = input else {
        return PathBuf::from(FALLBACK_OUTPUT);
    };

    let recognized = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
    if recognized {
        return input.with_extension("svg");
    }

    let mut path: OsString = input.as_os_str().to_owned();
    path.push(".svg");
    PathBuf::from(path)
}

async fn ensure_readable(path: &Path) -> Result<(), IfgcError> {
    tokio::fs::File::open(path)
        .await
        .map(drop)
        .map_err(|source| IfgcError::MissingFile {
            path: path.to_path_buf(),
            source,
        })
}
