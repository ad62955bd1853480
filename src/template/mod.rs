//! Template definitions and the catalog they are looked up from
//!
//! A template is a static node/edge description with coordinates relative to
//! its own origin. Nodes are addressed by symbolic keys owned by the template
//! itself; the first node is the root and always answers to `"root"`.
//!
//! # Example
//!
//! ```toml
//! [[templates]]
//! id = "pair"
//! name = "Pair"
//!
//! [[templates.nodes]]
//! text = "Root"
//!
//! [[templates.nodes]]
//! key = "child"
//! x = 400.0
//! text = "Child"
//!
//! [[templates.connections]]
//! from_key = "root"
//! to_key = "child"
//! ```

mod catalog;
mod definition;

pub use catalog::TemplateCatalog;
pub use definition::{LayoutKind, Template, TemplateConnection, TemplateNode, ROOT_KEY};
