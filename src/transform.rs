//! Coordinate transforms between pointer pixels and the percentage layout space.
//!
//! The pipeline for a pointer position is fixed: compensate zoom, subtract the
//! canvas container's origin, then (optionally snap and) convert the horizontal
//! component to a percentage of the canvas width.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::error::LayoutError;

/// A point in pixel space (screen or canvas-relative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel space, as reported by a bounding-box probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether the rect can anchor a percentage conversion: finite and non-degenerate.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Convert a horizontal pixel offset to a percentage of the canvas width.
///
/// # Errors
///
/// Returns `InvalidCanvasWidth` when `canvas_width_px` is zero, negative, or not finite.
pub fn to_percentage(pixel_x: f64, canvas_width_px: f64) -> Result<f64, LayoutError> {
    if canvas_width_px <= 0.0 || !canvas_width_px.is_finite() {
        return Err(LayoutError::InvalidCanvasWidth(canvas_width_px));
    }
    Ok(pixel_x * 100.0 / canvas_width_px)
}

/// Convert a percentage of the canvas width back to a horizontal pixel offset.
#[must_use]
pub fn to_pixels(percentage: f64, canvas_width_px: f64) -> f64 {
    percentage * canvas_width_px / 100.0
}

/// Map an offset captured in untransformed client space onto a canvas that is
/// visually scaled by `zoom_level`. A zoom of 1.0 leaves the offset unchanged.
#[must_use]
pub fn compensate_zoom(raw_offset: f64, zoom_level: f64) -> f64 {
    raw_offset + raw_offset * (1.0 - zoom_level)
}

/// Zoom-compensate a client-space pointer and make it relative to `container_origin`.
#[must_use]
pub fn pointer_to_canvas(pointer: Point, zoom_level: f64, container_origin: Point) -> Point {
    Point {
        x: compensate_zoom(pointer.x, zoom_level) - container_origin.x,
        y: compensate_zoom(pointer.y, zoom_level) - container_origin.y,
    }
}
