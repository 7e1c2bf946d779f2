//! Geometry: place a [`Document`]'s items on a canvas.
//!
//! All coordinates are integer SVG user units.

use serde::Serialize;

use crate::catalog::{Layout, TemplateSpec};
use crate::document::{Document, Item};
use crate::theme::Theme;

const MARGIN: i64 = 40;
const MIN_WIDTH: i64 = 480;
const CARD_WIDTH: i64 = 200;
const CARD_HEIGHT: i64 = 104;
const GAP: i64 = 48;
const TITLE_HEIGHT: i64 = 56;
const SUBTITLE_HEIGHT: i64 = 32;
const TREE_INDENT: i64 = 48;
const TREE_GAP: i64 = 24;
const BAR_WIDTH: i64 = 72;
const BAR_GAP: i64 = 32;
const CHART_HEIGHT: i64 = 240;
const MIN_BAR: i64 = 4;
const QUADRANT_CELLS: usize = 4;
/// Rough glyph width used to keep long titles inside the canvas.
const TITLE_GLYPH: i64 = 16;

/// Everything the SVG template draws.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub width: i64,
    pub height: i64,
    pub title: Option<TextLine>,
    pub subtitle: Option<TextLine>,
    pub cards: Vec<Card>,
    pub connectors: Vec<Connector>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextLine {
    pub x: i64,
    pub y: i64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    /// 1-based position, shown in the badge.
    pub index: usize,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    /// Horizontal center; all card text is anchored here.
    pub cx: i64,
    pub label: String,
    pub label_y: i64,
    pub desc: Option<String>,
    pub desc_y: i64,
    pub value: Option<String>,
    pub value_y: i64,
    pub icon: Option<String>,
    pub accent: String,
    pub badge: bool,
    /// Drawn as a filled bar instead of an outlined card.
    pub bar: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Connector {
    /// SVG path data.
    pub path: String,
    pub arrow: bool,
}

/// Lay out `doc` using the geometry of `spec`.
pub fn layout(doc: &Document, spec: &TemplateSpec, theme: &Theme) -> Frame {
    let mut top = MARGIN;
    let title = doc.title.as_ref().map(|text| {
        top += TITLE_HEIGHT;
        TextLine {
            x: MARGIN,
            y: MARGIN + 30,
            text: text.clone(),
        }
    });
    let subtitle = doc.desc.as_ref().map(|text| {
        let line = TextLine {
            x: MARGIN,
            y: top + 12,
            text: text.clone(),
        };
        top += SUBTITLE_HEIGHT;
        line
    });

    let mut frame = Frame {
        width: 0,
        height: 0,
        title,
        subtitle,
        cards: Vec::new(),
        connectors: Vec::new(),
    };

    let items = &doc.items;
    let (content_width, content_bottom) = match spec.layout {
        Layout::Row => place_grid(&mut frame, items, top, items.len().max(1), spec, theme),
        Layout::Column => place_grid(&mut frame, items, top, 1, spec, theme),
        Layout::Grid { columns } => place_grid(&mut frame, items, top, columns, spec, theme),
        Layout::Tree => place_tree(&mut frame, items, top, spec, theme),
        Layout::Bars => place_bars(&mut frame, items, top, spec, theme),
        Layout::Quadrant => place_quadrant(&mut frame, items, top, spec, theme),
    };

    let title_width = [&frame.title, &frame.subtitle]
        .iter()
        .filter_map(|line| line.as_ref())
        .map(|line| line.text.chars().count() as i64 * TITLE_GLYPH)
        .max()
        .unwrap_or(0);

    frame.width = (content_width.max(title_width) + 2 * MARGIN).max(MIN_WIDTH);
    frame.height = content_bottom + MARGIN;
    frame
}

fn card(index: usize, x: i64, y: i64, item: &Item, spec: &TemplateSpec, theme: &Theme) -> Card {
    let label_y = y + 44;
    Card {
        index: index + 1,
        x,
        y,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
        cx: x + CARD_WIDTH / 2,
        label: item.label.clone(),
        label_y,
        desc: item.desc.clone(),
        desc_y: label_y + 26,
        value: item.value.map(format_value),
        value_y: label_y + 48,
        icon: item.icon.clone(),
        accent: theme.accent(index).to_string(),
        badge: spec.badges,
        bar: false,
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn line(x1: i64, y1: i64, x2: i64, y2: i64, arrow: bool) -> Connector {
    Connector {
        path: format!("M {x1} {y1} L {x2} {y2}"),
        arrow,
    }
}

/// Row, column, and grid layouts: `columns` cards per row, wrapping.
/// Arrows follow reading order within a row and down a single column.
fn place_grid(
    frame: &mut Frame,
    items: &[Item],
    top: i64,
    columns: usize,
    spec: &TemplateSpec,
    theme: &Theme,
) -> (i64, i64) {
    let columns = columns.max(1);
    for (i, item) in items.iter().enumerate() {
        let col = (i % columns) as i64;
        let row = (i / columns) as i64;
        let x = MARGIN + col * (CARD_WIDTH + GAP);
        let y = top + row * (CARD_HEIGHT + GAP);
        frame.cards.push(card(i, x, y, item, spec, theme));
    }

    if spec.arrows {
        for pair in frame.cards.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.y == b.y {
                let mid = a.y + CARD_HEIGHT / 2;
                frame.connectors.push(line(a.x + CARD_WIDTH + 8, mid, b.x - 8, mid, true));
            } else if a.x == b.x {
                frame
                    .connectors
                    .push(line(a.cx, a.y + CARD_HEIGHT + 8, b.cx, b.y - 8, true));
            }
        }
    }

    let used_columns = items.len().clamp(1, columns) as i64;
    let rows = items.len().div_ceil(columns).max(1) as i64;
    let width = used_columns * CARD_WIDTH + (used_columns - 1) * GAP;
    let bottom = if items.is_empty() {
        top
    } else {
        top + rows * CARD_HEIGHT + (rows - 1) * GAP
    };
    (width, bottom)
}

/// Depth-first tree with elbow connectors from each parent to its children.
fn place_tree(
    frame: &mut Frame,
    items: &[Item],
    top: i64,
    spec: &TemplateSpec,
    theme: &Theme,
) -> (i64, i64) {
    let mut flat = Vec::new();
    flatten(items, 0, None, &mut flat);

    let mut max_depth = 0;
    for (i, (item, depth, parent)) in flat.iter().enumerate() {
        max_depth = max_depth.max(*depth);
        let x = MARGIN + *depth as i64 * TREE_INDENT;
        let y = top + i as i64 * (CARD_HEIGHT + TREE_GAP);
        let node = card(i, x, y, item, spec, theme);

        if let Some(parent) = parent.and_then(|p| frame.cards.get(p)) {
            let px = parent.x + TREE_INDENT / 2;
            let py = parent.y + CARD_HEIGHT;
            let mid = node.y + CARD_HEIGHT / 2;
            frame.connectors.push(Connector {
                path: format!("M {px} {py} V {mid} H {}", node.x),
                arrow: false,
            });
        }
        frame.cards.push(node);
    }

    let width = max_depth as i64 * TREE_INDENT + CARD_WIDTH;
    let count = flat.len() as i64;
    let bottom = if count == 0 {
        top
    } else {
        top + count * CARD_HEIGHT + (count - 1) * TREE_GAP
    };
    (width, bottom)
}

fn flatten<'a>(
    items: &'a [Item],
    depth: usize,
    parent: Option<usize>,
    out: &mut Vec<(&'a Item, usize, Option<usize>)>,
) {
    for item in items {
        let index = out.len();
        out.push((item, depth, parent));
        flatten(&item.children, depth + 1, Some(index), out);
    }
}

/// Bar chart: heights scale with `value` against the largest value.
/// Items without a value, or with a negative one, get a stub bar.
fn place_bars(
    frame: &mut Frame,
    items: &[Item],
    top: i64,
    spec: &TemplateSpec,
    theme: &Theme,
) -> (i64, i64) {
    let max = items
        .iter()
        .filter_map(|item| item.value)
        .fold(0.0_f64, f64::max);
    let baseline = top + CHART_HEIGHT;
    let label_y = baseline + 24;
    let has_desc = items.iter().any(|item| item.desc.is_some());

    for (i, item) in items.iter().enumerate() {
        let value = item.value.unwrap_or(0.0).max(0.0);
        let height = if max > 0.0 {
            ((value / max) * CHART_HEIGHT as f64).round() as i64
        } else {
            0
        }
        .max(MIN_BAR);

        let x = MARGIN + i as i64 * (BAR_WIDTH + BAR_GAP);
        let y = baseline - height;
        let mut bar = card(i, x, y, item, spec, theme);
        bar.width = BAR_WIDTH;
        bar.height = height;
        bar.cx = x + BAR_WIDTH / 2;
        bar.label_y = label_y;
        bar.desc_y = label_y + 20;
        bar.value_y = y - 8;
        bar.bar = true;
        frame.cards.push(bar);
    }

    let count = items.len().max(1) as i64;
    let width = count * BAR_WIDTH + (count - 1) * BAR_GAP;
    frame
        .connectors
        .push(line(MARGIN - 8, baseline, MARGIN + width + 8, baseline, false));

    let bottom = label_y + if has_desc { 28 } else { 8 };
    (width, bottom)
}

/// Two-by-two cells split by a vertical and a horizontal axis. The canvas
/// always holds all four cells; items past the fourth are not drawn.
fn place_quadrant(
    frame: &mut Frame,
    items: &[Item],
    top: i64,
    spec: &TemplateSpec,
    theme: &Theme,
) -> (i64, i64) {
    if items.len() > QUADRANT_CELLS {
        tracing::warn!(
            items = items.len(),
            "quadrant layout draws only the first {QUADRANT_CELLS} items"
        );
    }
    for (i, item) in items.iter().take(QUADRANT_CELLS).enumerate() {
        let x = MARGIN + (i % 2) as i64 * (CARD_WIDTH + GAP);
        let y = top + (i / 2) as i64 * (CARD_HEIGHT + GAP);
        frame.cards.push(card(i, x, y, item, spec, theme));
    }

    let width = 2 * CARD_WIDTH + GAP;
    let bottom = top + 2 * CARD_HEIGHT + GAP;
    let axis_x = MARGIN + CARD_WIDTH + GAP / 2;
    let axis_y = top + CARD_HEIGHT + GAP / 2;
    frame
        .connectors
        .push(line(axis_x, top - 8, axis_x, bottom + 8, false));
    frame
        .connectors
        .push(line(MARGIN - 8, axis_y, MARGIN + width + 8, axis_y, false));
    (width, bottom + 8)
}
