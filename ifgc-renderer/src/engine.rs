//! Tera-backed SVG emission and the [`BuiltinRenderer`].
//!
//! Rendering is a pure function of (document text, configuration):
//!
//! 1. parse the document;
//! 2. look the template up in the catalog;
//! 3. resolve the theme (configuration `theme`, then document `theme`,
//!    then `default`) and apply `background` / `palette` overrides;
//! 4. compute the layout;
//! 5. render the embedded SVG template.

use serde_json::Value;
use tera::{Context, Tera};

use ifgc_core::config::{BACKGROUND_KEY, THEME_KEY};
use ifgc_core::{Configuration, InfographicRenderer};

use crate::catalog;
use crate::document::{self, Document};
use crate::error::RenderError;
use crate::layout::layout;
use crate::theme::Theme;

/// Configuration key holding an array of accent colors.
pub const PALETTE_KEY: &str = "palette";

const SVG_TEMPLATE: &str = "infographic.svg";

// ---------------------------------------------------------------------------
// Embedded template — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const SVG_SOURCE: &str = include_str!("templates/infographic.svg.tera");

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".svg"]);
    tera.add_raw_template(SVG_TEMPLATE, SVG_SOURCE)?;
    Ok(tera)
}

/// Renderer for the document subset understood by this crate.
#[derive(Debug)]
pub struct BuiltinRenderer {
    tera: Tera,
}

impl BuiltinRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self { tera: build_tera()? })
    }

    /// Synchronous core of [`InfographicRenderer::render`].
    pub fn render_document(
        &self,
        source: &str,
        config: &Configuration,
    ) -> Result<String, RenderError> {
        let doc = document::parse(source)?;
        let spec = catalog::find(&doc.template)
            .ok_or_else(|| RenderError::UnknownTemplate(doc.template.clone()))?;
        let theme = resolve_theme(&doc, config)?;
        let frame = layout(&doc, spec, &theme);
        tracing::debug!(
            template = spec.id,
            theme = %theme.name,
            items = frame.cards.len(),
            width = frame.width,
            height = frame.height,
            "laid out infographic"
        );

        let mut ctx = Context::new();
        ctx.insert("template", spec.id);
        ctx.insert("theme", &theme);
        ctx.insert("frame", &frame);
        Ok(self.tera.render(SVG_TEMPLATE, &ctx)?)
    }
}

impl InfographicRenderer for BuiltinRenderer {
    type Error = RenderError;

    async fn render(&self, document: &str, config: &Configuration) -> Result<String, RenderError> {
        self.render_document(document, config)
    }

    fn templates(&self) -> Result<Vec<String>, RenderError> {
        Ok(catalog::ids())
    }
}

fn resolve_theme(doc: &Document, config: &Configuration) -> Result<Theme, RenderError> {
    let name = match config.get(THEME_KEY) {
        Some(value) => Some(expect_str(THEME_KEY, value)?),
        None => doc.theme.as_deref(),
    };
    let mut theme = Theme::named(name.unwrap_or("default"))?;

    if let Some(value) = config.get(BACKGROUND_KEY) {
        theme = theme.with_background(expect_str(BACKGROUND_KEY, value)?);
    }
    if let Some(value) = config.get(PALETTE_KEY) {
        theme = theme.with_palette(expect_colors(value)?);
    }
    Ok(theme)
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, RenderError> {
    value.as_str().ok_or_else(|| RenderError::InvalidOption {
        key: key.to_string(),
        expected: "a string",
    })
}

fn expect_colors(value: &Value) -> Result<Vec<String>, RenderError> {
    let invalid = || RenderError::InvalidOption {
        key: PALETTE_KEY.to_string(),
        expected: "an array of color strings",
    };
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
