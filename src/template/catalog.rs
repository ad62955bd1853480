//! Template catalog: lookup of templates by id, category or free text

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, EngineError};

use super::definition::Template;

/// Catalog shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    templates: Vec<Template>,
}

/// An ordered, read-only collection of templates
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
    by_id: HashMap<String, usize>,
}

impl TemplateCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(templates: Vec<Template>) -> Result<Self, EngineError> {
        let mut by_id = HashMap::with_capacity(templates.len());
        for (index, template) in templates.iter().enumerate() {
            if by_id.insert(template.id.clone(), index).is_some() {
                return Err(EngineError::duplicate(&template.id));
            }
        }
        Ok(Self { templates, by_id })
    }

    /// The catalog embedded in the crate
    pub fn builtin() -> Self {
        Self::from_str(BUILTIN_CATALOG).expect("Built-in catalog should be valid")
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, EngineError> {
        let parsed: TomlCatalog = toml::from_str(content).map_err(CatalogError::from)?;
        Self::new(parsed.templates)
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.by_id.get(id).map(|&i| &self.templates[i])
    }

    /// Get a template by id, failing if it is absent
    pub fn require(&self, id: &str) -> Result<&Template, EngineError> {
        self.get(id).ok_or_else(|| EngineError::not_found(id))
    }

    /// Templates in the given category, in catalog order
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Template> {
        self.templates
            .iter()
            .filter(move |t| t.category.eq_ignore_ascii_case(category))
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for t in &self.templates {
            if !seen.contains(&t.category.as_str()) {
                seen.push(t.category.as_str());
            }
        }
        seen
    }

    /// Templates whose name, description or tags contain the query
    ///
    /// An empty query matches everything.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Template> {
        let query = query.trim();
        self.templates
            .iter()
            .filter(move |t| query.is_empty() || t.matches(query))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
