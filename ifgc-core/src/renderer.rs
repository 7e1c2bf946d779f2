//! Capability interface to whatever turns document text into SVG.

use crate::config::Configuration;

/// A renderer for the declarative infographic document format.
///
/// Implementations must be deterministic: the same document and
/// configuration always produce the same bytes.
#[allow(async_fn_in_trait)]
pub trait InfographicRenderer {
    type Error: std::error::Error;

    /// Render `document` to a complete SVG document.
    async fn render(&self, document: &str, config: &Configuration) -> Result<String, Self::Error>;

    /// Template identifiers this renderer accepts, in display order.
    fn templates(&self) -> Result<Vec<String>, Self::Error>;
}
