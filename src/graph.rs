//! Mind-map graph produced by instantiation
//!
//! Nodes and connections carry an open `extra` map so that fields the engine
//! does not understand (shape hints, labels, metadata) pass through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fill and text color of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(alias = "bg_color")]
    pub bg_color: String,
    #[serde(alias = "font_color")]
    pub font_color: String,
}

impl NodeStyle {
    pub fn new(bg_color: impl Into<String>, font_color: impl Into<String>) -> Self {
        Self {
            bg_color: bg_color.into(),
            font_color: font_color.into(),
        }
    }

    /// White background with dark gray text
    pub fn neutral() -> Self {
        Self::new("#ffffff", "#333333")
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self::neutral()
    }
}

/// A positioned node on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub text: String,
    /// Left edge in canvas coordinates
    pub x: i64,
    /// Top edge in canvas coordinates
    pub y: i64,
    pub bg_color: String,
    pub font_color: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    pub fn style(&self) -> NodeStyle {
        NodeStyle::new(&self.bg_color, &self.font_color)
    }
}

/// A directed edge between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Connection {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            extra: Map::new(),
        }
    }
}

/// A collection of nodes and the connections between them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindMap {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl MindMap {
    pub fn new(nodes: Vec<Node>, connections: Vec<Connection>) -> Self {
        Self { nodes, connections }
    }

    /// Parse a map from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Find a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// The first node, which is the root of an instantiated template
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_node() -> Node {
        let mut extra = Map::new();
        extra.insert("shape".to_string(), json!("ellipse"));
        Node {
            id: "node-1".to_string(),
            text: "Goal".to_string(),
            x: 10,
            y: -20,
            bg_color: "#4caf50".to_string(),
            font_color: "#ffffff".to_string(),
            extra,
        }
    }

    #[test]
    fn test_node_serializes_camel_case_and_flattens_extra() {
        let value = serde_json::to_value(sample_node()).unwrap();
        assert_eq!(value["bgColor"], json!("#4caf50"));
        assert_eq!(value["fontColor"], json!("#ffffff"));
        assert_eq!(value["shape"], json!("ellipse"));
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_map_from_json_keeps_unknown_fields() {
        let json = r##"{
            "nodes": [
                {"id": "a", "text": "A", "x": 0, "y": 0, "bgColor": "#fff", "fontColor": "#000", "pinned": true}
            ],
            "connections": [{"id": "c", "from": "a", "to": "a", "label": "self"}]
        }"##;
        let map = MindMap::from_json(json).unwrap();
        assert_eq!(map.nodes[0].extra["pinned"], json!(true));
        assert_eq!(map.connections[0].extra["label"], json!("self"));
    }

    #[test]
    fn test_lookup_helpers() {
        let map = MindMap::new(vec![sample_node()], vec![]);
        assert!(map.contains_node("node-1"));
        assert!(!map.contains_node("node-2"));
        assert_eq!(map.root().map(|n| n.text.as_str()), Some("Goal"));
        assert_eq!(map.node("node-1").unwrap().style().bg_color, "#4caf50");
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let map = MindMap::from_json("{}").unwrap();
        assert!(map.is_empty());
    }
}
