//! Theme definitions.

use serde::Serialize;

use crate::error::RenderError;

/// Background value meaning "draw no background".
pub const TRANSPARENT: &str = "transparent";

/// Theme names accepted by [`Theme::named`].
pub const THEME_NAMES: &[&str] = &["default", "light", "dark", "hand-drawn"];

/// Colors and styles used by the SVG template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: String,
    /// `None` leaves the canvas transparent.
    pub background: Option<String>,
    pub card_fill: String,
    pub card_stroke: String,
    pub title_color: String,
    pub text_color: String,
    pub muted_color: String,
    pub connector_color: String,
    pub font_family: String,
    /// Accent colors, cycled per item.
    pub palette: Vec<String>,
    /// `stroke-dasharray` for card outlines; `None` is solid.
    pub dash: Option<String>,
    pub corner_radius: u32,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".into(),
            background: None,
            card_fill: "#ffffff".into(),
            card_stroke: "#d9d9d9".into(),
            title_color: "#1f1f1f".into(),
            text_color: "#262626".into(),
            muted_color: "#8c8c8c".into(),
            connector_color: "#bfbfbf".into(),
            font_family: "'Alibaba PuHuiTi', 'Helvetica Neue', Arial, sans-serif".into(),
            palette: strings(&["#1783ff", "#00c9c9", "#f0884d", "#d580ff", "#7863ff", "#60c42d"]),
            dash: None,
            corner_radius: 12,
        }
    }
}

impl Theme {
    /// Built-in theme by name. `light` is an alias of `default`.
    pub fn named(name: &str) -> Result<Self, RenderError> {
        match name {
            "default" | "light" => Ok(Self::default()),
            "dark" => Ok(Self::dark()),
            "hand-drawn" => Ok(Self::hand_drawn()),
            other => Err(RenderError::UnknownTheme {
                name: other.to_string(),
                expected: THEME_NAMES,
            }),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            background: Some("#141414".into()),
            card_fill: "#1f1f1f".into(),
            card_stroke: "#434343".into(),
            title_color: "#f0f0f0".into(),
            text_color: "#d9d9d9".into(),
            muted_color: "#8c8c8c".into(),
            connector_color: "#595959".into(),
            palette: strings(&["#3c89e8", "#13a8a8", "#d87a16", "#9254de", "#6f5cf0", "#49aa19"]),
            ..Self::default()
        }
    }

    pub fn hand_drawn() -> Self {
        Self {
            name: "hand-drawn".into(),
            card_stroke: "#595959".into(),
            font_family: "'Comic Sans MS', 'Chalkboard SE', cursive".into(),
            palette: strings(&["#e8684a", "#5b8ff9", "#5ad8a6", "#f6bd16", "#9270ca", "#ff9d4d"]),
            dash: Some("6 3".into()),
            corner_radius: 4,
            ..Self::default()
        }
    }

    /// Replace the background; `transparent` removes it.
    pub fn with_background(mut self, background: &str) -> Self {
        self.background = (background != TRANSPARENT).then(|| background.to_string());
        self
    }

    /// Replace the accent cycle. An empty list keeps the theme's own.
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Accent color for the item at `index`.
    pub fn accent(&self, index: usize) -> &str {
        self.palette
            .get(index % self.palette.len().max(1))
            .map(String::as_str)
            .unwrap_or("#1783ff")
    }
}
