//! Combining an instantiated template with an existing map

use log::{info, warn};

use crate::error::EngineError;
use crate::graph::{Connection, MindMap, Node};
use crate::ids::IdAllocator;
use crate::template::Template;

use super::config::LayoutConfig;
use super::instantiate::{instantiate, InstantiateOptions};
use super::types::Point;

/// Instantiate `template` as a subtree of the node `parent_id`
///
/// The template is centered one footprint width to the right of the parent
/// and its root is connected to the parent by one extra edge. Any center in
/// `options` is ignored. Inputs are left untouched; the merged map is
/// returned.
pub fn apply_template_to_node(
    template: &Template,
    existing_nodes: &[Node],
    existing_connections: &[Connection],
    parent_id: &str,
    options: &InstantiateOptions,
    config: &LayoutConfig,
    ids: &IdAllocator,
) -> Result<MindMap, EngineError> {
    let parent = existing_nodes
        .iter()
        .find(|n| n.id == parent_id)
        .ok_or_else(|| EngineError::unknown_parent(parent_id))?;

    let options = InstantiateOptions {
        center_x: Some(parent.x as f64 + config.node_size.0),
        center_y: Some(parent.y as f64),
        ..options.clone()
    };
    let subtree = instantiate(template, &options, config, ids);

    let mut merged = MindMap::new(existing_nodes.to_vec(), existing_connections.to_vec());
    match subtree.root() {
        Some(root) => {
            let link = Connection::new(ids.next_connection_id(), parent_id, &root.id);
            merged.connections.push(link);
        }
        None => {
            warn!(
                template = template.id.as_str(), parent_id;
                "Grafted an empty template, no edge added"
            );
        }
    }
    merged.nodes.extend(subtree.nodes);
    merged.connections.extend(subtree.connections);

    info!(
        template = template.id.as_str(), parent_id, nodes = merged.nodes.len();
        "Grafted template onto node"
    );
    Ok(merged)
}

/// Merge `template` into an existing map without attaching it to a node
///
/// Unless the caller fixes the center, the new cluster is placed at the
/// centroid of the existing nodes shifted right by the configured merge
/// offset. Collisions are only resolved within the new cluster.
pub fn merge_template_with_map(
    template: &Template,
    existing_nodes: &[Node],
    existing_connections: &[Connection],
    options: &InstantiateOptions,
    config: &LayoutConfig,
    ids: &IdAllocator,
) -> MindMap {
    let options = match centroid(existing_nodes) {
        Some(c) => InstantiateOptions {
            center_x: options.center_x.or(Some(c.x + config.merge_offset)),
            center_y: options.center_y.or(Some(c.y)),
            ..options.clone()
        },
        None => options.clone(),
    };
    let cluster = instantiate(template, &options, config, ids);

    let mut merged = MindMap::new(existing_nodes.to_vec(), existing_connections.to_vec());
    merged.nodes.extend(cluster.nodes);
    merged.connections.extend(cluster.connections);

    info!(
        template = template.id.as_str(), nodes = merged.nodes.len();
        "Merged template into map"
    );
    merged
}

/// Mean position of the given nodes
fn centroid(nodes: &[Node]) -> Option<Point> {
    if nodes.is_empty() {
        return None;
    }
    let n = nodes.len() as f64;
    let (sum_x, sum_y) = nodes
        .iter()
        .fold((0.0, 0.0), |(sx, sy), node| (sx + node.x as f64, sy + node.y as f64));
    Some(Point::new(sum_x / n, sum_y / n))
}
