//! Drop/insertion controller: turns a palette drop into a new `ComponentEntry`.
//!
//! The pointer position goes through the fixed transform pipeline: zoom
//! compensation, container-origin subtraction, rounding to whole pixels,
//! optional grid snapping, then percentage conversion of `left`. `top` stays
//! in pixels.

#[cfg(test)]
#[path = "drop_test.rs"]
mod drop_test;

use std::collections::BTreeMap;

use crate::catalog::ComponentCatalog;
use crate::error::LayoutError;
use crate::geometry::GeometryProbe;
use crate::grid::GridSnapper;
use crate::layout::{Breakpoint, CanvasState, ComponentEntry, LayoutRect, Visibility};
use crate::naming::{IdGenerator, NameGenerator};
use crate::transform::{Point, Rect, pointer_to_canvas, to_percentage};

/// Ambient parameters needed to interpret a pixel gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    /// Canvas root rect in client pixels. Its width is the only canvas width
    /// used by the gesture.
    pub canvas: Rect,
    pub zoom_level: f64,
    pub breakpoint: Breakpoint,
    pub grid_enabled: bool,
}

impl DragContext {
    /// Measure the canvas and build a context.
    ///
    /// # Errors
    ///
    /// Returns `GeometryUnavailable` if the probe reports nothing usable.
    pub fn measure(
        probe: &dyn GeometryProbe,
        zoom_level: f64,
        breakpoint: Breakpoint,
        grid_enabled: bool,
    ) -> Result<Self, LayoutError> {
        let canvas = probe.measure()?;
        Ok(Self { canvas, zoom_level, breakpoint, grid_enabled })
    }

    #[must_use]
    pub fn canvas_width_px(&self) -> f64 {
        self.canvas.width
    }
}

/// Collaborators consulted while inserting.
pub struct Inserter<'a> {
    pub catalog: &'a dyn ComponentCatalog,
    pub names: &'a dyn NameGenerator,
    pub ids: &'a mut dyn IdGenerator,
    pub snapper: &'a GridSnapper,
}

/// Canvas-relative drop position: `(top_px, left_percent)`.
///
/// # Errors
///
/// Returns `GeometryUnavailable` for an unmeasurable canvas and
/// `InvalidCanvasWidth` if the width cannot anchor a percentage.
pub fn drop_position(ctx: &DragContext, snapper: &GridSnapper, pointer: Point) -> Result<(f64, f64), LayoutError> {
    if !ctx.canvas.is_measurable() {
        return Err(LayoutError::GeometryUnavailable);
    }
    let width = ctx.canvas_width_px();
    let local = pointer_to_canvas(pointer, ctx.zoom_level, ctx.canvas.origin());
    let (left_px, top) = snapper.snap_if(ctx.grid_enabled, width, local.x.round(), local.y.round())?;
    let left = to_percentage(left_px, width)?;
    Ok((top, left))
}

/// Insert a new component of `type_name` dropped at client-space `pointer`.
///
/// Nothing is written unless every step succeeds.
///
/// # Errors
///
/// Returns `GeometryUnavailable`, `InvalidCanvasWidth`,
/// `UnknownComponentType`, `InvalidTemplate`, or `InvalidDocument` if the id
/// generator repeats an id already on the canvas.
pub fn insert_component(
    state: &mut CanvasState,
    ctx: &DragContext,
    inserter: &mut Inserter<'_>,
    type_name: &str,
    pointer: Point,
) -> Result<ComponentEntry, LayoutError> {
    let (top, left) = drop_position(ctx, inserter.snapper, pointer)?;

    let template = inserter
        .catalog
        .lookup(type_name)
        .ok_or_else(|| LayoutError::UnknownComponentType(type_name.to_string()))?;
    template.validate()?;

    let name = inserter.names.unique_name(&template.component, state);
    let mut component = template.instantiate(name);
    if ctx.breakpoint == Breakpoint::Mobile {
        component.definition.visibility = Visibility::mobile_only();
    }

    let id = inserter.ids.new_id();
    if state.contains(&id) {
        return Err(LayoutError::InvalidDocument(format!("id generator repeated id {id}")));
    }

    let rect = LayoutRect::new(top, left, template.default_size.width, template.default_size.height);
    let entry = ComponentEntry {
        id,
        component,
        layouts: BTreeMap::from([(ctx.breakpoint, rect)]),
        parent_id: None,
    };
    state.insert(entry.clone())?;

    tracing::debug!(id = %entry.id, name = %entry.component.name, breakpoint = %ctx.breakpoint, top, left, "component inserted");
    Ok(entry)
}
