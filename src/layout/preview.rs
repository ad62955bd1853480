//! Thumbnail projection of a template

use serde::Serialize;

use crate::template::Template;

use super::types::{BoundingBox, Point};

/// Share of the preview area a template may fill
const PREVIEW_FILL: f64 = 0.8;

/// Scaled node positions and index-pair edges for thumbnail rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePreview {
    pub points: Vec<PreviewPoint>,
    /// Edges as (from, to) indices into `points`
    pub edges: Vec<(usize, usize)>,
    /// Uniform scale applied to template coordinates, never above 1
    pub scale: f64,
}

/// A node position inside the preview area
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPoint {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub bg_color: String,
}

/// Fit the template's relative coordinates into a `width` x `height` area
///
/// The template is scaled uniformly to fit 80% of the area, but never scaled
/// up, and centered. Edges whose keys do not resolve are skipped.
pub fn template_preview(template: &Template, width: f64, height: f64) -> TemplatePreview {
    let Some(bounds) = BoundingBox::enclosing(template.nodes.iter().map(|n| Point::new(n.x, n.y)))
    else {
        return TemplatePreview {
            points: Vec::new(),
            edges: Vec::new(),
            scale: 1.0,
        };
    };

    let fit = |available: f64, span: f64| {
        if span > 0.0 {
            available * PREVIEW_FILL / span
        } else {
            f64::INFINITY
        }
    };
    let scale = fit(width, bounds.width)
        .min(fit(height, bounds.height))
        .min(1.0)
        .max(0.0);

    let offset_x = (width - bounds.width * scale) / 2.0;
    let offset_y = (height - bounds.height * scale) / 2.0;

    let points = template
        .nodes
        .iter()
        .map(|n| PreviewPoint {
            x: (n.x - bounds.x) * scale + offset_x,
            y: (n.y - bounds.y) * scale + offset_y,
            text: n.text.clone(),
            bg_color: n.bg_color.clone(),
        })
        .collect();

    let edges = template
        .connections
        .iter()
        .filter_map(|c| Some((template.index_of(&c.from_key)?, template.index_of(&c.to_key)?)))
        .collect();

    TemplatePreview {
        points,
        edges,
        scale,
    }
}
