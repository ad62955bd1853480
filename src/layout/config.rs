//! Configuration for template placement

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::graph::NodeStyle;

/// Configuration options for instantiating templates
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Footprint reserved per node for collision detection (width, height)
    pub node_size: (f64, f64),

    /// Minimum free space between two placed nodes
    pub gap: f64,

    /// Attempts at finding a free slot before accepting an overlap
    pub max_attempts: usize,

    /// Placement center when the caller gives none (x, y)
    pub default_center: (f64, f64),

    /// Rightward offset from the centroid of an existing map when merging
    pub merge_offset: f64,

    /// Style applied when template colors are not preserved
    pub neutral_style: NodeStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: (300.0, 70.0),
            gap: 30.0,
            max_attempts: 50,
            default_center: (400.0, 300.0),
            merge_offset: 400.0,
            neutral_style: NodeStyle::neutral(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the node footprint
    pub fn with_node_size(mut self, width: f64, height: f64) -> Self {
        self.node_size = (width, height);
        self
    }

    /// Set the minimum gap between nodes
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the collision search bound
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the default placement center
    pub fn with_default_center(mut self, x: f64, y: f64) -> Self {
        self.default_center = (x, y);
        self
    }

    /// Set the merge offset
    pub fn with_merge_offset(mut self, offset: f64) -> Self {
        self.merge_offset = offset;
        self
    }

    /// Set the neutral node style
    pub fn with_neutral_style(mut self, style: NodeStyle) -> Self {
        self.neutral_style = style;
        self
    }

    /// Horizontal distance of one collision step
    pub fn step_x(&self) -> f64 {
        self.node_size.0 + self.gap
    }

    /// Vertical distance of one collision step
    pub fn step_y(&self) -> f64 {
        self.node_size.1 + self.gap
    }
}
