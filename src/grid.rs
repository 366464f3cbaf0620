//! Grid snapping for pixel positions.
//!
//! Columns divide the canvas width into `columns` equal cells; rows use a
//! fixed pixel pitch. Each coordinate snaps to the nearest cell boundary.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::config::LayoutConfig;
use crate::error::LayoutError;

/// Quantizes pixel positions to the canvas grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnapper {
    columns: u32,
    row_pitch_px: f64,
}

impl GridSnapper {
    #[must_use]
    pub fn new(columns: u32, row_pitch_px: f64) -> Self {
        Self { columns, row_pitch_px }
    }

    #[must_use]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.grid_columns, config.row_pitch_px)
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn row_pitch_px(&self) -> f64 {
        self.row_pitch_px
    }

    /// Width of one grid column in pixels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCanvasWidth` for a non-positive or non-finite width.
    pub fn cell_width(&self, canvas_width_px: f64) -> Result<f64, LayoutError> {
        if canvas_width_px <= 0.0 || !canvas_width_px.is_finite() || self.columns == 0 {
            return Err(LayoutError::InvalidCanvasWidth(canvas_width_px));
        }
        Ok(canvas_width_px / f64::from(self.columns))
    }

    /// Snap `(left_px, top_px)` to the nearest grid intersection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCanvasWidth` for a non-positive or non-finite width.
    pub fn snap(&self, canvas_width_px: f64, left_px: f64, top_px: f64) -> Result<(f64, f64), LayoutError> {
        let cell = self.cell_width(canvas_width_px)?;
        let left = (left_px / cell).round() * cell;
        let top = if self.row_pitch_px > 0.0 { (top_px / self.row_pitch_px).round() * self.row_pitch_px } else { top_px };
        Ok((left, top))
    }

    /// Snap only when `enabled`; otherwise the position passes through untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCanvasWidth` when snapping is enabled and the width is unusable.
    pub fn snap_if(
        &self,
        enabled: bool,
        canvas_width_px: f64,
        left_px: f64,
        top_px: f64,
    ) -> Result<(f64, f64), LayoutError> {
        if enabled { self.snap(canvas_width_px, left_px, top_px) } else { Ok((left_px, top_px)) }
    }

    /// `(cell_width, row_pitch)` used to draw the grid background.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCanvasWidth` for a non-positive or non-finite width.
    pub fn background_size(&self, canvas_width_px: f64) -> Result<(f64, f64), LayoutError> {
        Ok((self.cell_width(canvas_width_px)?, self.row_pitch_px))
    }
}

impl Default for GridSnapper {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}
