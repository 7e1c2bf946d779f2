//! # ifgc-renderer
//!
//! Built-in reference renderer for the declarative infographic document
//! format, exposed through [`ifgc_core::InfographicRenderer`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ifgc_core::{Configuration, InfographicRenderer};
//! use ifgc_renderer::BuiltinRenderer;
//!
//! async fn demo() -> Result<(), ifgc_renderer::RenderError> {
//!     let renderer = BuiltinRenderer::new()?;
//!     let doc = "infographic list-row-simple-horizontal-arrow\ndata\n  items\n    - label A\n";
//!     let svg = renderer.render(doc, &Configuration::new()).await?;
//!     println!("{} bytes", svg.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod document;
pub mod engine;
pub mod error;
pub mod layout;
pub mod theme;

pub use catalog::{Layout, TemplateSpec};
pub use document::{Document, Item};
pub use engine::BuiltinRenderer;
pub use error::RenderError;
pub use theme::Theme;
