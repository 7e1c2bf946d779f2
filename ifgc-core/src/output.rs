//! Output writer: persist a rendered payload to its [`OutputTarget`].

use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::error::{write_err, IfgcError};
use crate::request::OutputTarget;

/// Write `payload` to `target`, creating missing parent directories for
/// file targets. Existing files are overwritten in full.
pub async fn write_output(target: &OutputTarget, payload: &str) -> Result<(), IfgcError> {
    match target {
        OutputTarget::Stdout => write_stdout(payload).await,
        OutputTarget::File(path) => write_file(path, payload).await,
    }
}

async fn write_stdout(payload: &str) -> Result<(), IfgcError> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(payload.as_bytes())
        .await
        .map_err(|e| write_err("standard output", e))?;
    stdout
        .flush()
        .await
        .map_err(|e| write_err("standard output", e))
}

async fn write_file(path: &Path, payload: &str) -> Result<(), IfgcError> {
    let target = || path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| write_err(target(), e))?;
    }
    tokio::fs::write(path, payload)
        .await
        .map_err(|e| write_err(target(), e))?;

    tracing::info!("wrote: {}", path.display());
    Ok(())
}
