//! Container geometry probe: where the canvas is and how wide it is.
//!
//! The probe is the single source of the canvas width for a gesture. Every
//! conversion in that gesture uses the width it reported.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::error::LayoutError;
use crate::transform::Rect;

/// Measures the canvas root element.
pub trait GeometryProbe {
    /// Bounding rect of the canvas root in client pixels, or `None` if it cannot be measured.
    fn canvas_rect(&self) -> Option<Rect>;

    /// Measured canvas rect, rejecting missing or degenerate measurements.
    ///
    /// # Errors
    ///
    /// Returns `GeometryUnavailable` if nothing usable was measured.
    fn measure(&self) -> Result<Rect, LayoutError> {
        self.canvas_rect()
            .filter(Rect::is_measurable)
            .ok_or(LayoutError::GeometryUnavailable)
    }
}

/// A probe that reports a fixed rect. Used by hosts that track layout
/// themselves, and by tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedGeometry {
    rect: Option<Rect>,
}

impl FixedGeometry {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self { rect: Some(rect) }
    }

    /// A probe whose element is not mounted.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { rect: None }
    }

    pub fn set(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }
}

impl GeometryProbe for FixedGeometry {
    fn canvas_rect(&self) -> Option<Rect> {
        self.rect
    }
}
