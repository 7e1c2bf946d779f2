//! Parser for the declarative infographic document format.
//!
//! The format is indentation-structured. Every non-blank line is
//! `key [value]`; a line starting with `- ` opens a list item whose fields
//! continue at the column after the dash. Lines whose first non-blank
//! character is `#` are comments.
//!
//! ```text
//! infographic list-row-simple-horizontal-arrow
//! theme dark
//! data
//!   title Quarterly Plan
//!   desc What ships when
//!   items
//!     - label Q1
//!       desc Discovery
//!       value 30
//!     - label Q2
//!       children
//!         - label Beta
//! ```
//!
//! Parsing happens in two passes: the text becomes a generic [`Node`] tree,
//! then the tree is read into a typed [`Document`]. Keys this renderer does
//! not understand are skipped.

use crate::error::{syntax, RenderError};

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub template: String,
    pub theme: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub items: Vec<Item>,
}

/// One entry of `data.items` (or of an item's `children`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub label: String,
    pub desc: Option<String>,
    pub value: Option<f64>,
    pub icon: Option<String>,
    pub children: Vec<Item>,
}

/// Generic tree node. List items use the key `-`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub key: String,
    pub value: Option<String>,
    pub line: usize,
    pub children: Vec<Node>,
}

const ITEM_KEY: &str = "-";

impl Node {
    fn is_item(&self) -> bool {
        self.key == ITEM_KEY
    }

    fn child(&self, key: &str) -> Option<&Node> {
        self.children.iter().find(|n| n.key == key)
    }

    fn child_value(&self, key: &str) -> Option<String> {
        self.child(key).and_then(|n| n.value.clone())
    }
}

/// Parse document text into a [`Document`].
pub fn parse(source: &str) -> Result<Document, RenderError> {
    let tree = parse_tree(source)?;
    read_document(&tree)
}

// ---------------------------------------------------------------------------
// Pass 1: text -> Node tree
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Line {
    number: usize,
    indent: usize,
    key: String,
    value: Option<String>,
}

/// Parse document text into its generic node tree.
pub fn parse_tree(source: &str) -> Result<Vec<Node>, RenderError> {
    let lines = tokenize(source);
    let Some(first) = lines.first() else {
        return Ok(Vec::new());
    };

    let mut pos = 0;
    let nodes = parse_level(&lines, &mut pos, first.indent)?;
    if let Some(stray) = lines.get(pos) {
        return Err(syntax(stray.number, "line is indented less than the first line"));
    }
    Ok(nodes)
}

fn tokenize(source: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let number = idx + 1;
        let raw = raw.trim_end();
        let content = raw.trim_start();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let indent = indent_width(&raw[..raw.len() - content.len()]);

        if content == ITEM_KEY {
            lines.push(item_marker(number, indent));
        } else if let Some(rest) = content.strip_prefix("- ") {
            lines.push(item_marker(number, indent));
            let field = rest.trim_start();
            let field_indent = indent + 2 + indent_width(&rest[..rest.len() - field.len()]);
            lines.push(field_line(number, field_indent, field));
        } else {
            lines.push(field_line(number, indent, content));
        }
    }
    lines
}

fn item_marker(number: usize, indent: usize) -> Line {
    Line {
        number,
        indent,
        key: ITEM_KEY.into(),
        value: None,
    }
}

fn field_line(number: usize, indent: usize, content: &str) -> Line {
    let (key, value) = match content.split_once(char::is_whitespace) {
        Some((key, value)) => (key, Some(value.trim())),
        None => (content, None),
    };
    Line {
        number,
        indent,
        key: key.to_string(),
        value: value.filter(|v| !v.is_empty()).map(str::to_string),
    }
}

/// Tabs count as two columns.
fn indent_width(prefix: &str) -> usize {
    prefix.chars().map(|c| if c == '\t' { 2 } else { 1 }).sum()
}

fn parse_level(lines: &[Line], pos: &mut usize, indent: usize) -> Result<Vec<Node>, RenderError> {
    let mut nodes = Vec::new();
    while let Some(line) = lines.get(*pos) {
        if line.indent < indent {
            break;
        }
        if line.indent > indent {
            return Err(syntax(line.number, "inconsistent indentation"));
        }
        *pos += 1;

        let children = match lines.get(*pos) {
            Some(next) if next.indent > indent => parse_level(lines, pos, next.indent)?,
            _ => Vec::new(),
        };
        nodes.push(Node {
            key: line.key.clone(),
            value: line.value.clone(),
            line: line.number,
            children,
        });
    }
    Ok(nodes)
}

// ---------------------------------------------------------------------------
// Pass 2: Node tree -> Document
// ---------------------------------------------------------------------------

fn read_document(tree: &[Node]) -> Result<Document, RenderError> {
    let header = tree
        .iter()
        .find(|n| n.key == "infographic")
        .ok_or(RenderError::MissingTemplate)?;
    let template = header.value.clone().ok_or(RenderError::MissingTemplate)?;

    // `theme` and `data` may sit at the root or under the header line.
    let sections: Vec<&Node> = tree.iter().chain(header.children.iter()).collect();
    let mut doc = Document {
        template,
        ..Default::default()
    };

    for node in sections {
        match node.key.as_str() {
            "theme" => {
                doc.theme = node.value.clone().or_else(|| node.child_value("type"));
            }
            "data" => {
                doc.title = node.child_value("title");
                doc.desc = node.child_value("desc");
                if let Some(items) = node.child("items") {
                    doc.items = read_items(items)?;
                }
            }
            "infographic" => {}
            other => tracing::debug!(key = other, line = node.line, "ignoring unknown section"),
        }
    }
    Ok(doc)
}

fn read_items(list: &Node) -> Result<Vec<Item>, RenderError> {
    list.children.iter().map(read_item).collect()
}

fn read_item(node: &Node) -> Result<Item, RenderError> {
    if !node.is_item() {
        return Err(syntax(
            node.line,
            format!("expected a list item (`- ...`), found `{}`", node.key),
        ));
    }

    let value = match node.child("value") {
        Some(v) => {
            let raw = v.value.as_deref().unwrap_or_default();
            let parsed = raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| syntax(v.line, format!("`value` must be a number, found `{raw}`")))?;
            Some(parsed)
        }
        None => None,
    };

    let children = match node.child("children") {
        Some(list) => read_items(list)?,
        None => Vec::new(),
    };

    Ok(Item {
        label: node.child_value("label").unwrap_or_default(),
        desc: node.child_value("desc"),
        value,
        icon: node.child_value("icon"),
        children,
    })
}
