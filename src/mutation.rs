//! Mutation engine: move, resize, property updates, and removal.
//!
//! DESIGN
//! ======
//! Every operation takes the current `CanvasState` by exclusive reference and
//! patches it in place, so no caller can hold a stale snapshot across a write.
//! Inputs are validated before anything is touched: an `Err` always means the
//! state is unchanged. Operations on an unknown id return `ComponentNotFound`.
//!
//! Only the addressed breakpoint's `LayoutRect` is ever written; the other
//! breakpoints of the same component are at most read to seed a missing one.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use std::collections::HashSet;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::layout::{Breakpoint, CanvasState, ComponentEntry, ComponentId, LayoutRect, PartialLayoutRect};
use crate::transform::{Point, to_percentage};

// =============================================================================
// GEOMETRY
// =============================================================================

/// Apply a sparse geometry patch to one breakpoint of one component.
///
/// A breakpoint without a layout yet is seeded from the component's layout on
/// the other breakpoint, so a move keeps a size that fits the grid.
/// `config.default_rect` is only used when the component has no layout at all.
///
/// # Errors
///
/// Returns `ComponentNotFound` if `id` is not on the canvas.
pub fn apply_layout_patch(
    state: &mut CanvasState,
    config: &LayoutConfig,
    id: &ComponentId,
    breakpoint: Breakpoint,
    patch: &PartialLayoutRect,
) -> Result<LayoutRect, LayoutError> {
    let entry = state
        .get_mut(id)
        .ok_or_else(|| LayoutError::ComponentNotFound(id.clone()))?;
    let sibling = entry.layouts.iter().find(|(bp, _)| **bp != breakpoint).map(|(_, rect)| *rect);
    let rect = entry.layouts.entry(breakpoint).or_insert_with(|| match sibling {
        Some(seed) => {
            tracing::debug!(%id, %breakpoint, "component has no layout for breakpoint; seeding from sibling breakpoint");
            seed
        }
        None => {
            tracing::warn!(%id, %breakpoint, "component has no layout at all; seeding default rect");
            config.default_rect
        }
    });
    rect.apply(patch);
    Ok(*rect)
}

/// Move a component on one breakpoint. Only `top` and `left` change.
///
/// # Errors
///
/// Returns `ComponentNotFound` if `id` is not on the canvas.
pub fn move_component(
    state: &mut CanvasState,
    config: &LayoutConfig,
    id: &ComponentId,
    breakpoint: Breakpoint,
    top: f64,
    left: f64,
) -> Result<LayoutRect, LayoutError> {
    let rect = apply_layout_patch(state, config, id, breakpoint, &PartialLayoutRect::position(top, left))?;
    tracing::debug!(%id, %breakpoint, top, left, "component moved");
    Ok(rect)
}

/// Parameters of a finished resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDelta {
    /// Change in rendered width, in pixels.
    pub width_px: f64,
    /// Change in height, in pixels.
    pub height_px: f64,
    /// New canvas-relative top-left of the component, in pixels.
    pub position: Point,
}

/// Resize a component on one breakpoint.
///
/// The width delta is scaled into grid units (`delta * grid_columns /
/// canvas_width`) and the result rounded; height stays in pixels. The
/// component also takes the new position, with `left` as a percentage.
///
/// # Errors
///
/// Returns `InvalidCanvasWidth` for an unusable width and `ComponentNotFound`
/// if `id` is not on the canvas.
pub fn resize_component(
    state: &mut CanvasState,
    config: &LayoutConfig,
    id: &ComponentId,
    breakpoint: Breakpoint,
    delta: ResizeDelta,
    canvas_width_px: f64,
) -> Result<LayoutRect, LayoutError> {
    let left = to_percentage(delta.position.x, canvas_width_px)?;
    let entry = state
        .get(id)
        .ok_or_else(|| LayoutError::ComponentNotFound(id.clone()))?;

    let old = if let Some(rect) = entry.layout(breakpoint) {
        *rect
    } else {
        tracing::warn!(%id, %breakpoint, "resizing component without a layout; using default rect");
        config.default_rect
    };

    let width = (old.width + delta.width_px * config.width_scale() / canvas_width_px).round();
    let height = old.height + delta.height_px;
    let patch = PartialLayoutRect { top: Some(delta.position.y), left: Some(left), width: Some(width), height: Some(height) };

    let rect = apply_layout_patch(state, config, id, breakpoint, &patch)?;
    tracing::debug!(%id, %breakpoint, width, height, "component resized");
    Ok(rect)
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Whether a property value carries nothing to merge.
#[must_use]
pub fn is_empty_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Set `properties[name] = value` on a component's definition.
///
/// Empty values (null, `{}`, `[]`) are skipped and `Ok(false)` is returned so
/// empty change sets never churn the state.
///
/// # Errors
///
/// Returns `ComponentNotFound` if `id` is not on the canvas.
pub fn update_component_property(
    state: &mut CanvasState,
    id: &ComponentId,
    name: &str,
    value: serde_json::Value,
) -> Result<bool, LayoutError> {
    let entry = state
        .get_mut(id)
        .ok_or_else(|| LayoutError::ComponentNotFound(id.clone()))?;
    if is_empty_value(&value) {
        return Ok(false);
    }
    entry.component.definition.properties.insert(name.to_string(), value);
    tracing::debug!(%id, property = name, "component property updated");
    Ok(true)
}

/// Apply several property changes to one component. Returns how many were applied.
///
/// # Errors
///
/// Returns `ComponentNotFound` if `id` is not on the canvas; nothing is applied.
pub fn update_component_properties(
    state: &mut CanvasState,
    id: &ComponentId,
    changes: impl IntoIterator<Item = (String, serde_json::Value)>,
) -> Result<usize, LayoutError> {
    let entry = state
        .get_mut(id)
        .ok_or_else(|| LayoutError::ComponentNotFound(id.clone()))?;
    let properties = &mut entry.component.definition.properties;
    let mut applied = 0;
    for (name, value) in changes {
        if is_empty_value(&value) {
            continue;
        }
        properties.insert(name, value);
        applied += 1;
    }
    if applied > 0 {
        tracing::debug!(%id, applied, "component properties updated");
    }
    Ok(applied)
}

// =============================================================================
// REMOVAL
// =============================================================================

/// Remove a component and every component nested under it, so no entry is
/// left pointing at a missing parent. Returns the removed entries, the
/// addressed component first.
///
/// # Errors
///
/// Returns `ComponentNotFound` if `id` is not on the canvas.
pub fn remove_component(state: &mut CanvasState, id: &ComponentId) -> Result<Vec<ComponentEntry>, LayoutError> {
    if !state.contains(id) {
        return Err(LayoutError::ComponentNotFound(id.clone()));
    }

    let mut doomed: Vec<ComponentId> = vec![id.clone()];
    let mut seen: HashSet<ComponentId> = HashSet::from([id.clone()]);
    let mut cursor = 0;
    while cursor < doomed.len() {
        let parent = doomed[cursor].clone();
        let mut children: Vec<ComponentId> = state
            .iter()
            .filter(|entry| entry.parent_id.as_ref() == Some(&parent))
            .map(|entry| entry.id.clone())
            .filter(|child| !seen.contains(child))
            .collect();
        children.sort();
        seen.extend(children.iter().cloned());
        doomed.extend(children);
        cursor += 1;
    }

    let removed: Vec<ComponentEntry> = doomed.iter().filter_map(|doomed_id| state.remove(doomed_id)).collect();
    tracing::debug!(%id, removed = removed.len(), "component removed");
    Ok(removed)
}
