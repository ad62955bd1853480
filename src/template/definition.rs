//! Template definitions: the immutable stamps that instantiation turns into graphs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::graph::NodeStyle;

/// Key under which the first node of every template is addressable
pub const ROOT_KEY: &str = "root";

/// Layout family a template was authored for
///
/// Informational only: placement always uses the template's relative
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    #[default]
    Radial,
    Tree,
    Horizontal,
    Vertical,
    Grid,
    Freeform,
}

/// A node descriptor with coordinates relative to the template origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateNode {
    /// Symbolic key used by connections. The root may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_bg_color", alias = "bgColor")]
    pub bg_color: String,
    #[serde(default = "default_font_color", alias = "fontColor")]
    pub font_color: String,
    /// Fields carried through to the emitted node unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_bg_color() -> String {
    NodeStyle::neutral().bg_color
}

fn default_font_color() -> String {
    NodeStyle::neutral().font_color
}

impl TemplateNode {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            key: None,
            x,
            y,
            text: text.into(),
            bg_color: default_bg_color(),
            font_color: default_font_color(),
            extra: Map::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.bg_color = style.bg_color;
        self.font_color = style.font_color;
        self
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    pub fn style(&self) -> NodeStyle {
        NodeStyle::new(&self.bg_color, &self.font_color)
    }
}

/// An edge between two symbolic node keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConnection {
    #[serde(alias = "fromKey")]
    pub from_key: String,
    #[serde(alias = "toKey")]
    pub to_key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateConnection {
    pub fn new(from_key: impl Into<String>, to_key: impl Into<String>) -> Self {
        Self {
            from_key: from_key.into(),
            to_key: to_key.into(),
            extra: Map::new(),
        }
    }
}

/// A declarative node/edge subgraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub layout: LayoutKind,
    #[serde(default)]
    pub nodes: Vec<TemplateNode>,
    #[serde(default)]
    pub connections: Vec<TemplateConnection>,
}

impl Template {
    /// Create an empty template with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            layout: LayoutKind::default(),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_node(mut self, node: TemplateNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_connection(mut self, from_key: &str, to_key: &str) -> Self {
        self.connections
            .push(TemplateConnection::new(from_key, to_key));
        self
    }

    /// Symbolic key of the node at `index`
    ///
    /// The root answers to its explicit key if it has one, and to
    /// [`ROOT_KEY`] in every case. Non-root nodes without a key fall back to
    /// `node<index>`.
    pub fn node_key(&self, index: usize) -> Cow<'_, str> {
        match self.nodes.get(index).and_then(|n| n.key.as_deref()) {
            Some(key) => Cow::Borrowed(key),
            None if index == 0 => Cow::Borrowed(ROOT_KEY),
            None => Cow::Owned(format!("node{}", index)),
        }
    }

    /// Index of the node answering to `key`
    pub fn index_of(&self, key: &str) -> Option<usize> {
        if key == ROOT_KEY && !self.nodes.is_empty() {
            return Some(0);
        }
        (0..self.nodes.len())
            .rev()
            .find(|&i| self.node_key(i) == key)
    }

    /// Whether the free-text query matches name, description or a tag
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}
