//! Component catalog: the templates new components are instantiated from.
//!
//! The catalog is an external collaborator. `ComponentCatalog::lookup` hands
//! out an owned template per call, so an instance can never alias the shared
//! template or another instance of the same type.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::{ComponentDefinition, ComponentMeta};

/// Default footprint of a new component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in grid units.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Catalog entry for one component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTemplate {
    /// Type name, e.g. `"Table"`.
    pub component: String,
    pub default_size: Size,
    #[serde(default)]
    pub definition: ComponentDefinition,
}

impl ComponentTemplate {
    /// Check the template can produce a well-formed component.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemplate` for an empty type name or a non-positive default size.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.component.trim().is_empty() {
            return Err(self.invalid("empty type name"));
        }
        let Size { width, height } = self.default_size;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(self.invalid(&format!("default size {width}x{height} must be positive")));
        }
        Ok(())
    }

    /// Produce the per-instance metadata for a new component named `name`.
    #[must_use]
    pub fn instantiate(&self, name: String) -> ComponentMeta {
        ComponentMeta { type_name: self.component.clone(), name, definition: self.definition.clone() }
    }

    fn invalid(&self, reason: &str) -> LayoutError {
        LayoutError::InvalidTemplate { type_name: self.component.clone(), reason: reason.to_string() }
    }
}

/// Source of component templates by type name.
pub trait ComponentCatalog {
    /// Return an owned copy of the template for `type_name`, if known.
    fn lookup(&self, type_name: &str) -> Option<ComponentTemplate>;
}

/// In-memory catalog loaded once from a template list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    templates: HashMap<String, ComponentTemplate>,
}

impl StaticCatalog {
    /// Build a catalog, validating every template.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemplate` for a malformed or duplicated template.
    pub fn new(templates: impl IntoIterator<Item = ComponentTemplate>) -> Result<Self, LayoutError> {
        let mut map = HashMap::new();
        for template in templates {
            template.validate()?;
            if map.contains_key(&template.component) {
                return Err(template.invalid("duplicate type name"));
            }
            map.insert(template.component.clone(), template);
        }
        Ok(Self { templates: map })
    }

    /// Load a catalog from a JSON array of templates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` on malformed JSON, or `InvalidTemplate` as [`StaticCatalog::new`].
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let templates: Vec<ComponentTemplate> =
            serde_json::from_str(json).map_err(|e| LayoutError::InvalidDocument(e.to_string()))?;
        Self::new(templates)
    }

    /// Known type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl ComponentCatalog for StaticCatalog {
    fn lookup(&self, type_name: &str) -> Option<ComponentTemplate> {
        self.templates.get(type_name).cloned()
    }
}
