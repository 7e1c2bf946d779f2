//! `ifgc template` — list the templates the renderer accepts.

use anyhow::Result;
use colored::Colorize;

use ifgc_core::InfographicRenderer;

pub const TEMPLATE_DOCS_URL: &str = "https://github.com/antvis/Infographic";

pub fn run<R>(renderer: &R) -> Result<()>
where
    R: InfographicRenderer,
    R::Error: Send + Sync + 'static,
{
    let templates = renderer.templates()?;

    println!("{}", format!("Available templates ({}):\n", templates.len()).cyan());
    for name in &templates {
        println!("  • {name}");
    }
    println!();
    println!("📖 Visit {TEMPLATE_DOCS_URL} to see template previews and examples");
    Ok(())
}
