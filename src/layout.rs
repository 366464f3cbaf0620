//! Layout model: component identities, per-breakpoint geometry, and the canvas map.
//!
//! This module defines what is placed on the canvas (`ComponentEntry`), where
//! it sits for each responsive mode (`LayoutRect` keyed by `Breakpoint`), a
//! sparse-update type for incremental geometry edits (`PartialLayoutRect`),
//! and the store that owns every live component (`CanvasState`).
//!
//! Horizontal geometry is responsive: `left` is a percentage of the canvas
//! width and `width` is counted in grid units. Vertical geometry (`top`,
//! `height`) stays in raw pixels.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Opaque, globally unique component identifier. Never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Responsive rendering mode. Geometry and visibility are independent per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Mobile,
}

impl Breakpoint {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of one component on one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    /// Distance from the canvas top, in pixels.
    pub top: f64,
    /// Distance from the canvas left edge, in percent of the canvas width.
    pub left: f64,
    /// Width in grid units. May exceed the remaining space; clamping is a view concern.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl LayoutRect {
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// Apply the present fields of `patch`.
    pub fn apply(&mut self, patch: &PartialLayoutRect) {
        if let Some(top) = patch.top {
            self.top = top;
        }
        if let Some(left) = patch.left {
            self.left = left;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
    }
}

/// Sparse update for a `LayoutRect`. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialLayoutRect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PartialLayoutRect {
    /// Position-only patch, as produced by a move.
    #[must_use]
    pub fn position(top: f64, left: f64) -> Self {
        Self { top: Some(top), left: Some(left), ..Default::default() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.width.is_none() && self.height.is_none()
    }
}

/// Per-breakpoint visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub show_on_desktop: bool,
    pub show_on_mobile: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self { show_on_desktop: true, show_on_mobile: true }
    }
}

impl Visibility {
    /// Visibility of a component authored while the mobile breakpoint is active.
    #[must_use]
    pub fn mobile_only() -> Self {
        Self { show_on_desktop: false, show_on_mobile: true }
    }

    #[must_use]
    pub fn shows_on(self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Desktop => self.show_on_desktop,
            Breakpoint::Mobile => self.show_on_mobile,
        }
    }
}

/// Per-instance component definition with a fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Named property values. Opaque to the layout engine.
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Named style values. Opaque to the layout engine.
    #[serde(default)]
    pub styles: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Catalog-derived metadata of a placed component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    /// Catalog type name, e.g. `"Button"`.
    pub type_name: String,
    /// Display name, unique within the canvas.
    pub name: String,
    pub definition: ComponentDefinition,
}

/// The persisted record of one placed component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub id: ComponentId,
    pub component: ComponentMeta,
    pub layouts: BTreeMap<Breakpoint, LayoutRect>,
    /// Container this component is nested in; `None` means the root canvas.
    #[serde(default)]
    pub parent_id: Option<ComponentId>,
}

impl ComponentEntry {
    #[must_use]
    pub fn layout(&self, breakpoint: Breakpoint) -> Option<&LayoutRect> {
        self.layouts.get(&breakpoint)
    }

    /// Whether this component renders directly on the root canvas.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Whether `entry` should be rendered on `breakpoint`.
#[must_use]
pub fn is_visible(entry: &ComponentEntry, breakpoint: Breakpoint) -> bool {
    entry.component.definition.visibility.shows_on(breakpoint)
}

/// All components on the canvas, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    components: HashMap<ComponentId, ComponentEntry>,
}

impl CanvasState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from a list of entries, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if an entry has no layout or an id repeats.
    pub fn from_entries(entries: impl IntoIterator<Item = ComponentEntry>) -> Result<Self, LayoutError> {
        let mut state = Self::new();
        for entry in entries {
            if state.components.contains_key(&entry.id) {
                return Err(LayoutError::InvalidDocument(format!("duplicate component id {}", entry.id)));
            }
            state.insert(entry)?;
        }
        Ok(state)
    }

    /// Parse a persisted canvas and validate it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` on malformed JSON, a map key that disagrees
    /// with the entry's own id, or an entry without any layout.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let state: Self = serde_json::from_str(json).map_err(|e| LayoutError::InvalidDocument(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    /// Serialize the canvas for persistence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if serialization fails.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        serde_json::to_string(self).map_err(|e| LayoutError::InvalidDocument(e.to_string()))
    }

    fn validate(&self) -> Result<(), LayoutError> {
        for (key, entry) in &self.components {
            if *key != entry.id {
                return Err(LayoutError::InvalidDocument(format!("key {key} holds component {}", entry.id)));
            }
            if entry.layouts.is_empty() {
                return Err(LayoutError::InvalidDocument(format!("component {key} has no layouts")));
            }
        }
        Ok(())
    }

    /// Insert or replace a component. Returns the previous entry with the same id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if the entry carries no layout at all.
    pub fn insert(&mut self, entry: ComponentEntry) -> Result<Option<ComponentEntry>, LayoutError> {
        if entry.layouts.is_empty() {
            return Err(LayoutError::InvalidDocument(format!("component {} has no layouts", entry.id)));
        }
        Ok(self.components.insert(entry.id.clone(), entry))
    }

    /// Remove a component by id, returning it if it was present.
    pub fn remove(&mut self, id: &ComponentId) -> Option<ComponentEntry> {
        self.components.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ComponentId) -> Option<&ComponentEntry> {
        self.components.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &ComponentId) -> Option<&mut ComponentEntry> {
        self.components.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ComponentId) -> bool {
        self.components.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentEntry> {
        self.components.values()
    }

    /// Components the root canvas renders on `breakpoint`: no parent and
    /// visible there. Sorted by id so repeated renders are stable.
    #[must_use]
    pub fn root_components(&self, breakpoint: Breakpoint) -> Vec<&ComponentEntry> {
        let mut roots: Vec<&ComponentEntry> = self
            .components
            .values()
            .filter(|entry| entry.is_root() && is_visible(entry, breakpoint))
            .collect();
        roots.sort_by(|a, b| a.id.cmp(&b.id));
        roots
    }

    /// Number of components on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
