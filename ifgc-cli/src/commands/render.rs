//! Default action: `ifgc [-i <file> | -s <content>] [-o <file>] ...`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ifgc_core::options::{self, RenderOptions};
use ifgc_core::{input, InfographicRenderer, OutputTarget, RenderDispatch};

use crate::report::Reporter;

/// Flags of the default render action.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input .ifgc file (omit, or pass "-", to read from stdin).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Input .ifgc content as a string (use \n for newlines).
    #[arg(short, long, value_name = "CONTENT")]
    pub string: Option<String>,

    /// Output file (default: input file with .svg extension; "-" for stdout).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Background color (default: transparent).
    #[arg(long, value_name = "COLOR")]
    pub background: Option<String>,

    /// JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Theme name.
    #[arg(short, long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Suppress log output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl From<RenderArgs> for RenderOptions {
    fn from(args: RenderArgs) -> Self {
        RenderOptions {
            input: args.input,
            string: args.string,
            output: args.output,
            config: args.config,
            theme: args.theme,
            background: args.background,
            quiet: args.quiet,
        }
    }
}

impl RenderArgs {
    pub async fn run<R: InfographicRenderer>(self, renderer: &R) -> Result<()> {
        let request = options::resolve(self.into()).await?;
        let reporter = Reporter::new(request.quiet, request.output.is_stdout());

        let document = input::acquire(&request.input).await?;

        reporter.info("Rendering infographic...");
        RenderDispatch::new(renderer).run(&document, &request).await?;

        if let OutputTarget::File(path) = &request.output {
            reporter.success(format!("Infographic rendered to {}", path.display()));
        }
        Ok(())
    }
}
