//! Built-in template catalog.
//!
//! Template identifiers follow the `<family>-<variant>` naming of the
//! document format; each one maps to a [`Layout`] and a few presentation
//! switches.

/// Geometric arrangement of the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Left to right, one card per item.
    Row,
    /// Top to bottom, one card per item.
    Column,
    /// Wrapped grid with a fixed column count.
    Grid { columns: usize },
    /// Depth-first tree, children indented under their parent.
    Tree,
    /// Vertical bars scaled by `value`.
    Bars,
    /// Four cells around a pair of central axes.
    Quadrant,
}

/// One entry of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub layout: Layout,
    /// Draw arrows between consecutive cards.
    pub arrows: bool,
    /// Show the 1-based position badge on each card.
    pub badges: bool,
}

const fn spec(id: &'static str, layout: Layout, arrows: bool, badges: bool) -> TemplateSpec {
    TemplateSpec {
        id,
        layout,
        arrows,
        badges,
    }
}

/// Every template, in display order.
pub const TEMPLATES: &[TemplateSpec] = &[
    spec("list-row-simple-horizontal-arrow", Layout::Row, true, false),
    spec("list-row-horizontal-icon-line", Layout::Row, false, true),
    spec("list-column-simple-vertical-arrow", Layout::Column, true, false),
    spec("list-column-done-list", Layout::Column, false, true),
    spec("list-grid-badge-card", Layout::Grid { columns: 3 }, false, true),
    spec("list-grid-simple", Layout::Grid { columns: 3 }, false, false),
    spec("sequence-timeline-simple", Layout::Column, true, true),
    spec("sequence-steps-simple", Layout::Row, true, true),
    spec("compare-binary-horizontal-simple-vs", Layout::Grid { columns: 2 }, false, false),
    spec("quadrant-quarter-simple-card", Layout::Quadrant, false, true),
    spec("hierarchy-tree-tech-style-capsule-item", Layout::Tree, false, false),
    spec("hierarchy-tree-curved-line-rounded-rect-node", Layout::Tree, false, true),
    spec("chart-bar-plain-text", Layout::Bars, false, false),
    spec("chart-column-simple", Layout::Bars, false, true),
];

/// Look up a template by identifier.
pub fn find(id: &str) -> Option<&'static TemplateSpec> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Template identifiers in display order.
pub fn ids() -> Vec<String> {
    TEMPLATES.iter().map(|t| t.id.to_string()).collect()
}
