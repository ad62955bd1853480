//! Turning a template into a fresh, positioned subgraph

use log::{debug, warn};

use crate::graph::{Connection, MindMap, Node, NodeStyle};
use crate::ids::{IdAllocator, KeyMap};
use crate::template::Template;

use super::config::LayoutConfig;
use super::placement::OccupiedRegions;
use super::types::Point;

/// Per-call options for [`instantiate`]
#[derive(Debug, Clone, PartialEq)]
pub struct InstantiateOptions {
    /// Placement center x; falls back to the configured default
    pub center_x: Option<f64>,
    /// Placement center y; falls back to the configured default
    pub center_y: Option<f64>,
    /// Multiplier applied to relative template offsets
    pub scale_nodes: f64,
    /// Keep the template palette instead of the neutral style
    pub preserve_colors: bool,
    /// Replacement label for the root node
    pub custom_root_text: Option<String>,
}

impl Default for InstantiateOptions {
    fn default() -> Self {
        Self {
            center_x: None,
            center_y: None,
            scale_nodes: 1.0,
            preserve_colors: true,
            custom_root_text: None,
        }
    }
}

impl InstantiateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center_x = Some(x);
        self.center_y = Some(y);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale_nodes = scale;
        self
    }

    pub fn with_preserve_colors(mut self, preserve: bool) -> Self {
        self.preserve_colors = preserve;
        self
    }

    pub fn with_root_text(mut self, text: impl Into<String>) -> Self {
        self.custom_root_text = Some(text.into());
        self
    }

    /// Effective placement center under the given configuration
    pub fn center(&self, config: &LayoutConfig) -> Point {
        Point::new(
            self.center_x.unwrap_or(config.default_center.0),
            self.center_y.unwrap_or(config.default_center.1),
        )
    }
}

/// Instantiate a template as a new subgraph
///
/// Nodes are emitted in template order, so index 0 of the result is always
/// the template root. Connections whose endpoints do not resolve are dropped
/// and logged.
pub fn instantiate(
    template: &Template,
    options: &InstantiateOptions,
    config: &LayoutConfig,
    ids: &IdAllocator,
) -> MindMap {
    let keys = KeyMap::build(template, ids);
    let center = options.center(config);
    let mut occupied = OccupiedRegions::new(config);
    let mut nodes = Vec::with_capacity(template.nodes.len());

    for (index, descriptor) in template.nodes.iter().enumerate() {
        let desired = center.offset(
            descriptor.x * options.scale_nodes,
            descriptor.y * options.scale_nodes,
        );
        let placement = occupied.place(desired);

        let text = match (&options.custom_root_text, index) {
            (Some(root_text), 0) => root_text.clone(),
            _ => descriptor.text.clone(),
        };
        let style: NodeStyle = if options.preserve_colors {
            descriptor.style()
        } else {
            config.neutral_style.clone()
        };

        nodes.push(Node {
            id: keys.id_at(index).unwrap_or_default().to_string(),
            text,
            x: placement.position.x.round() as i64,
            y: placement.position.y.round() as i64,
            bg_color: style.bg_color,
            font_color: style.font_color,
            extra: descriptor.extra.clone(),
        });
    }

    let connections = rewrite_connections(template, &keys, ids);

    debug!(
        template = template.id.as_str(), nodes = nodes.len(), connections = connections.len();
        "Instantiated template"
    );

    MindMap::new(nodes, connections)
}

/// Rewrite symbolic template edges against freshly allocated node ids
fn rewrite_connections(template: &Template, keys: &KeyMap, ids: &IdAllocator) -> Vec<Connection> {
    let mut connections = Vec::with_capacity(template.connections.len());

    for edge in &template.connections {
        let (Some(from), Some(to)) = (keys.resolve(&edge.from_key), keys.resolve(&edge.to_key))
        else {
            warn!(
                template = template.id.as_str(),
                from_key = edge.from_key.as_str(),
                to_key = edge.to_key.as_str();
                "Dropping connection with unresolved endpoint"
            );
            continue;
        };

        connections.push(Connection {
            id: ids.next_connection_id(),
            from: from.to_string(),
            to: to.to_string(),
            extra: edge.extra.clone(),
        });
    }

    connections
}
