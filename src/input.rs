//! Input model: drag sources, ambient view state, and the gesture state machine.
//!
//! `GestureState` tracks the gesture between its start and its stop/drop.
//! Intermediate pointer ticks only update the gesture; nothing reaches the
//! `CanvasState` until the gesture completes, so an aborted gesture leaves no
//! trace.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::layout::{Breakpoint, ComponentId, LayoutRect};
use crate::transform::Point;

/// Where a dragged item comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSource {
    /// A new component dragged in from the palette.
    Palette {
        /// Catalog type name.
        type_name: String,
    },
    /// A component already placed on the canvas.
    Placed { id: ComponentId },
}

/// The payload carried by a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragItem {
    pub source: DragSource,
    /// Breakpoint active when the drag started.
    pub breakpoint: Breakpoint,
}

impl DragItem {
    #[must_use]
    pub fn palette(type_name: impl Into<String>, breakpoint: Breakpoint) -> Self {
        Self { source: DragSource::Palette { type_name: type_name.into() }, breakpoint }
    }

    #[must_use]
    pub fn placed(id: ComponentId, breakpoint: Breakpoint) -> Self {
        Self { source: DragSource::Placed { id }, breakpoint }
    }

    /// Whether dropping this item creates a new component.
    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self.source, DragSource::Palette { .. })
    }
}

/// Ambient editor state that shapes how gestures are interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Active breakpoint.
    pub breakpoint: Breakpoint,
    /// Visual scale of the canvas (1.0 = unscaled).
    pub zoom_level: f64,
    /// Snap drops to the grid.
    pub snap_to_grid: bool,
    /// The currently selected component, if any.
    pub selected_id: Option<ComponentId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self { breakpoint: Breakpoint::Desktop, zoom_level: 1.0, snap_to_grid: false, selected_id: None }
    }
}

/// The gesture in progress, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// Waiting for the next gesture.
    #[default]
    Idle,
    /// A palette item is being dragged over the canvas.
    DraggingNew {
        type_name: String,
        /// Client-space pointer position at the latest tick.
        last_pointer: Point,
    },
    /// A placed component is being dragged.
    DraggingComponent {
        id: ComponentId,
        /// Breakpoint the drag started on; the stop commits to it.
        breakpoint: Breakpoint,
        /// Layout at drag start, for the view to revert to on cancel.
        origin: Option<LayoutRect>,
        /// Client-space pointer position at the latest tick.
        last_pointer: Point,
    },
    /// A placed component is being resized.
    ResizingComponent {
        id: ComponentId,
        breakpoint: Breakpoint,
        origin: Option<LayoutRect>,
    },
}

impl GestureState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The placed component this gesture acts on, if any.
    #[must_use]
    pub fn target(&self) -> Option<&ComponentId> {
        match self {
            Self::DraggingComponent { id, .. } | Self::ResizingComponent { id, .. } => Some(id),
            Self::Idle | Self::DraggingNew { .. } => None,
        }
    }

    /// Breakpoint captured at gesture start when the gesture targets `id`.
    #[must_use]
    pub fn breakpoint_for(&self, id: &ComponentId) -> Option<Breakpoint> {
        match self {
            Self::DraggingComponent { id: target, breakpoint, .. }
            | Self::ResizingComponent { id: target, breakpoint, .. }
                if target == id =>
            {
                Some(*breakpoint)
            }
            _ => None,
        }
    }

    /// Record a pointer tick. Returns false when no drag is in progress.
    pub fn track_pointer(&mut self, pointer: Point) -> bool {
        match self {
            Self::DraggingNew { last_pointer, .. } | Self::DraggingComponent { last_pointer, .. } => {
                *last_pointer = pointer;
                true
            }
            Self::Idle | Self::ResizingComponent { .. } => false,
        }
    }
}
