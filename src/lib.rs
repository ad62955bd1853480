//! Mindmap Templates - stamp declarative templates onto a mind-map canvas
//!
//! This library instantiates node/edge templates into uniquely identified,
//! collision-free subgraphs that can be merged into an existing map.
//!
//! # Example
//!
//! ```rust
//! use mindmap_templates::{InstantiateOptions, TemplateCatalog, TemplateEngine};
//!
//! let catalog = TemplateCatalog::builtin();
//! let template = catalog.require("swot-analysis").unwrap();
//!
//! let engine = TemplateEngine::new();
//! let map = engine.instantiate(template, &InstantiateOptions::new().with_center(500.0, 300.0));
//!
//! assert_eq!(map.nodes.len(), 5);
//! assert_eq!(map.connections.len(), 4);
//! ```

pub mod error;
pub mod graph;
pub mod ids;
pub mod layout;
pub mod template;

pub use error::{CatalogError, ConfigError, EngineError};
pub use graph::{Connection, MindMap, Node, NodeStyle};
pub use ids::{IdAllocator, IdKind, KeyMap};
pub use layout::{
    apply_template_to_node, instantiate, merge_template_with_map, template_preview,
    InstantiateOptions, LayoutConfig, TemplatePreview,
};
pub use template::{LayoutKind, Template, TemplateCatalog, TemplateConnection, TemplateNode};

/// A layout configuration paired with the allocator its ids come from
#[derive(Debug, Default)]
pub struct TemplateEngine {
    config: LayoutConfig,
    ids: IdAllocator,
}

impl TemplateEngine {
    /// Engine with default configuration and the process-wide id counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the given allocator, e.g. a deterministic one in tests
    pub fn with_allocator(mut self, ids: IdAllocator) -> Self {
        self.ids = ids;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.ids
    }

    /// See [`layout::instantiate`]
    pub fn instantiate(&self, template: &Template, options: &InstantiateOptions) -> MindMap {
        instantiate(template, options, &self.config, &self.ids)
    }

    /// See [`layout::apply_template_to_node`]
    pub fn apply_template_to_node(
        &self,
        template: &Template,
        existing: &MindMap,
        parent_id: &str,
        options: &InstantiateOptions,
    ) -> Result<MindMap, EngineError> {
        apply_template_to_node(
            template,
            &existing.nodes,
            &existing.connections,
            parent_id,
            options,
            &self.config,
            &self.ids,
        )
    }

    /// See [`layout::merge_template_with_map`]
    pub fn merge_template_with_map(
        &self,
        template: &Template,
        existing: &MindMap,
        options: &InstantiateOptions,
    ) -> MindMap {
        merge_template_with_map(
            template,
            &existing.nodes,
            &existing.connections,
            options,
            &self.config,
            &self.ids,
        )
    }

    /// See [`layout::template_preview`]
    pub fn preview(&self, template: &Template, width: f64, height: f64) -> TemplatePreview {
        template_preview(template, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().with_allocator(IdAllocator::starting_at(1))
    }

    #[test]
    fn test_engine_instantiates_builtin() {
        let catalog = TemplateCatalog::builtin();
        let map = engine().instantiate(
            catalog.require("goal-planning").unwrap(),
            &InstantiateOptions::new(),
        );
        assert_eq!(map.nodes[0].text, "My Goal");
        assert_eq!(map.nodes[0].id, "node-1");
    }

    #[test]
    fn test_engine_graft_and_merge_share_allocator() {
        let catalog = TemplateCatalog::builtin();
        let engine = engine();
        let template = catalog.require("brainstorm").unwrap();

        let base = engine.instantiate(template, &InstantiateOptions::new());
        let root_id = base.nodes[0].id.clone();
        let grafted = engine
            .apply_template_to_node(template, &base, &root_id, &InstantiateOptions::new())
            .unwrap();
        let merged = engine.merge_template_with_map(template, &grafted, &InstantiateOptions::new());

        let mut ids: Vec<_> = merged.nodes.iter().map(|n| n.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_default_engines_never_share_ids() {
        let catalog = TemplateCatalog::builtin();
        let template = catalog.require("goal-planning").unwrap();
        let a = TemplateEngine::new().instantiate(template, &InstantiateOptions::new());
        let b = TemplateEngine::new().instantiate(template, &InstantiateOptions::new());

        let ids_of = |map: &MindMap| -> std::collections::HashSet<String> {
            map.nodes
                .iter()
                .map(|n| n.id.clone())
                .chain(map.connections.iter().map(|c| c.id.clone()))
                .collect()
        };
        assert!(ids_of(&a).is_disjoint(&ids_of(&b)));
    }

    #[test]
    fn test_engine_custom_config() {
        let engine = engine().with_config(LayoutConfig::default().with_default_center(0.0, 0.0));
        assert_eq!(engine.config().default_center, (0.0, 0.0));
        let catalog = TemplateCatalog::builtin();
        let template = catalog.iter().next().unwrap();
        let preview = engine.preview(template, 100.0, 100.0);
        assert!(preview.scale <= 1.0);
    }
}
