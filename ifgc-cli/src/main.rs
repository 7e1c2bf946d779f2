//! ifgc — render declarative infographics to SVG.
//!
//! # Usage
//!
//! ```text
//! ifgc -i <file> [-o <file>] [-c <config.json>] [-t <theme>] [--background <color>] [-q]
//! ifgc -s "infographic <template>\ndata\n  title ..." -o out.svg
//! cat doc.ifgc | ifgc -o - > out.svg
//! ifgc template
//! ```

mod commands;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::render::RenderArgs;
use ifgc_renderer::BuiltinRenderer;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "ifgc",
    version,
    about = "Command-line interface for declarative infographics - render infographic documents to SVG",
    long_about = None,
    args_conflicts_with_subcommands = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available infographic templates.
    Template,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "invocation failed");
            report::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let renderer = BuiltinRenderer::new()?;
    match cli.command {
        Some(Commands::Template) => commands::template::run(&renderer),
        None => cli.render.run(&renderer).await,
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
