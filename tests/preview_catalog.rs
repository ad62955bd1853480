//! Integration tests for template previews and catalog loading

use mindmap_templates::{template_preview, Template, TemplateCatalog, TemplateNode};
use proptest::prelude::*;

const CUSTOM_CATALOG: &str = r##"
[[templates]]
id = "retro"
name = "Sprint Retrospective"
description = "What went well, what did not, and what to try next"
category = "team"
tags = ["agile", "retro"]
layout = "horizontal"

[[templates.nodes]]
key = "sprint"
text = "Sprint"
bgColor = "#607d8b"
fontColor = "#ffffff"

[[templates.nodes]]
key = "well"
x = 400.0
y = -120.0
text = "Went well"

[[templates.nodes]]
key = "badly"
x = 400.0
y = 0.0
text = "Went badly"

[[templates.nodes]]
key = "try"
x = 400.0
y = 120.0
text = "Try next"

[[templates.connections]]
from_key = "sprint"
to_key = "well"

[[templates.connections]]
fromKey = "root"
toKey = "badly"

[[templates.connections]]
from_key = "sprint"
to_key = "try"
"##;

#[test]
fn test_custom_catalog_lookup() {
    let catalog = TemplateCatalog::from_str(CUSTOM_CATALOG).expect("Should parse");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.categories(), vec!["team"]);
    assert_eq!(catalog.search("AGILE").count(), 1);

    let retro = catalog.require("retro").unwrap();
    assert_eq!(retro.nodes[0].bg_color, "#607d8b");
    assert_eq!(retro.index_of("root"), Some(0));
    assert_eq!(retro.index_of("sprint"), Some(0));
}

#[test]
fn test_preview_of_custom_catalog_template() {
    let catalog = TemplateCatalog::from_str(CUSTOM_CATALOG).unwrap();
    let preview = template_preview(catalog.require("retro").unwrap(), 160.0, 120.0);

    assert_eq!(preview.points.len(), 4);
    assert_eq!(preview.edges, vec![(0, 1), (0, 2), (0, 3)]);
    // 400 wide fits into 128 before 240 tall fits into 96
    assert!((preview.scale - 0.32).abs() < 1e-9);
    for p in &preview.points {
        assert!(p.x >= 0.0 && p.x <= 160.0);
        assert!(p.y >= 0.0 && p.y <= 120.0);
    }
}

#[test]
fn test_builtin_previews_fit() {
    let catalog = TemplateCatalog::builtin();
    for template in catalog.iter() {
        let preview = template_preview(template, 240.0, 160.0);
        assert_eq!(preview.points.len(), template.nodes.len());
        assert_eq!(preview.edges.len(), template.connections.len());
        for p in &preview.points {
            assert!(p.x >= 0.0 && p.x <= 240.0, "{}: x {}", template.id, p.x);
            assert!(p.y >= 0.0 && p.y <= 160.0, "{}: y {}", template.id, p.y);
        }
    }
}

fn template_strategy() -> impl Strategy<Value = Template> {
    prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 1..12).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .fold(Template::new("generated"), |t, (i, (x, y))| {
                t.with_node(TemplateNode::new(x, y, format!("n{}", i)))
            })
    })
}

fn span(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    max - min
}

proptest! {
    #[test]
    fn preview_never_upscales(
        template in template_strategy(),
        width in 10.0f64..5000.0,
        height in 10.0f64..5000.0,
    ) {
        let preview = template_preview(&template, width, height);
        prop_assert!(preview.scale <= 1.0);

        let original_w = span(template.nodes.iter().map(|n| n.x));
        let original_h = span(template.nodes.iter().map(|n| n.y));
        let scaled_w = span(preview.points.iter().map(|p| p.x));
        let scaled_h = span(preview.points.iter().map(|p| p.y));
        prop_assert!(scaled_w <= original_w + 1e-6);
        prop_assert!(scaled_h <= original_h + 1e-6);
        prop_assert!(scaled_w <= width * 0.8 + 1e-6);
        prop_assert!(scaled_h <= height * 0.8 + 1e-6);
    }
}
