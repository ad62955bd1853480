//! Error types for the template engine

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a template catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that can occur when loading a layout configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors reported by engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Graft target is not part of the existing map
    #[error("parent node '{parent_id}' does not exist in the map")]
    UnknownParent { parent_id: String },

    /// Catalog lookup by id failed
    #[error("template not found: {id}")]
    TemplateNotFound { id: String },

    /// Two templates in one catalog share an id
    #[error("duplicate template id: {id}")]
    DuplicateTemplate { id: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Create an unknown parent error
    pub fn unknown_parent(parent_id: impl Into<String>) -> Self {
        Self::UnknownParent {
            parent_id: parent_id.into(),
        }
    }

    /// Create a template not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::TemplateNotFound { id: id.into() }
    }

    /// Create a duplicate template error
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateTemplate { id: id.into() }
    }
}
