//! Renders every fixture document through the public renderer API.

use ifgc_core::{Configuration, InfographicRenderer};
use ifgc_renderer::{catalog, BuiltinRenderer, RenderError};

const FIXTURES: &[(&str, &str)] = &[
    ("01-basic-list", include_str!("fixtures/01-basic-list.ifgc")),
    ("02-timeline", include_str!("fixtures/02-timeline.ifgc")),
    ("03-themed-dark", include_str!("fixtures/03-themed-dark.ifgc")),
    ("04-hierarchy", include_str!("fixtures/04-hierarchy.ifgc")),
    ("05-quadrant", include_str!("fixtures/05-quadrant.ifgc")),
    ("06-chart-bars", include_str!("fixtures/06-chart-bars.ifgc")),
    ("07-comparison", include_str!("fixtures/07-comparison.ifgc")),
];

fn renderer() -> BuiltinRenderer {
    BuiltinRenderer::new().expect("build renderer")
}

#[tokio::test]
async fn every_fixture_renders_a_complete_svg() {
    let renderer = renderer();
    for (name, source) in FIXTURES {
        let svg = renderer
            .render(source, &Configuration::new())
            .await
            .unwrap_or_else(|e| panic!("{name}: {e}"));

        assert!(
            svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg"),
            "{name}: missing XML declaration or root element"
        );
        assert!(svg.trim_end().ends_with("</svg>"), "{name}: root not closed");
        assert_eq!(svg.matches("<svg").count(), 1, "{name}: more than one root");
        assert!(svg.len() > 1000, "{name}: only {} bytes", svg.len());
    }
}

#[tokio::test]
async fn labels_and_titles_appear_in_output() {
    let svg = renderer()
        .render(FIXTURES[0].1, &Configuration::new())
        .await
        .unwrap();
    for text in ["Getting Started", "Install", "Grab the binary", "Render"] {
        assert!(svg.contains(text), "missing {text}");
    }
    assert!(svg.contains("marker-end=\"url(#ifgc-arrow)\""));
}

#[tokio::test]
async fn rendering_is_deterministic() {
    let renderer = renderer();
    let mut config = Configuration::new();
    config.insert("theme", "hand-drawn");
    for (name, source) in FIXTURES {
        let first = renderer.render(source, &config).await.unwrap();
        let second = renderer.render(source, &config).await.unwrap();
        assert_eq!(first, second, "{name}: output differs between runs");
    }
}

#[tokio::test]
async fn every_catalog_template_renders() {
    let renderer = renderer();
    for id in renderer.templates().unwrap() {
        let doc = format!("infographic {id}\ndata\n  title T\n  items\n    - label A\n      value 3\n");
        let svg = renderer.render(&doc, &Configuration::new()).await.unwrap();
        assert!(svg.contains(&format!("data-template=\"{id}\"")));
        assert!(svg.len() > 1000, "{id}: only {} bytes", svg.len());
    }
}

#[test]
fn template_listing_follows_catalog_order() {
    let ids = renderer().templates().unwrap();
    assert_eq!(ids.len(), catalog::TEMPLATES.len());
    assert_eq!(ids[0], "list-row-simple-horizontal-arrow");
    assert!(ids.iter().any(|id| id == "hierarchy-tree-tech-style-capsule-item"));
}

#[tokio::test]
async fn syntax_errors_carry_line_numbers() {
    let err = renderer()
        .render(
            "infographic x\ndata\n  items\n    - label A\n      value NaN-ish\n",
            &Configuration::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RenderError::Syntax { line: 5, .. }), "got: {err}");
    assert!(err.to_string().contains("line 5"));
}
