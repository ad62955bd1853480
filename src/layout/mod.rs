//! Layout and graph transformation
//!
//! Converts template-relative coordinates into absolute, non-overlapping
//! canvas positions, rewrites symbolic edges against freshly allocated ids,
//! and optionally combines the result with an existing map.

pub mod config;
pub mod graft;
pub mod instantiate;
pub mod placement;
pub mod preview;
pub mod types;

pub use config::LayoutConfig;
pub use graft::{apply_template_to_node, merge_template_with_map};
pub use instantiate::{instantiate, InstantiateOptions};
pub use placement::{OccupiedRegions, Placement};
pub use preview::{template_preview, PreviewPoint, TemplatePreview};
pub use types::{BoundingBox, Point};
