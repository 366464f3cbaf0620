//! Layout engine configuration, with defaults and environment overrides.

use crate::consts::{
    CANVAS_HEIGHT_PX, DEFAULT_RECT_HEIGHT, DEFAULT_RECT_LEFT, DEFAULT_RECT_TOP, DEFAULT_RECT_WIDTH, GRID_COLUMNS,
    GRID_ROW_PITCH_PX,
};
use crate::error::LayoutError;
use crate::layout::LayoutRect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Columns across the canvas width; also the resize width divisor.
    pub grid_columns: u32,
    /// Vertical snap pitch in pixels.
    pub row_pitch_px: f64,
    /// Whether drops snap to the grid.
    pub snap_to_grid: bool,
    /// Logical canvas height in pixels.
    pub canvas_height_px: f64,
    /// Rect substituted when a resized component has no layout for the breakpoint.
    pub default_rect: LayoutRect,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_columns: GRID_COLUMNS,
            row_pitch_px: GRID_ROW_PITCH_PX,
            snap_to_grid: false,
            canvas_height_px: CANVAS_HEIGHT_PX,
            default_rect: LayoutRect::new(DEFAULT_RECT_TOP, DEFAULT_RECT_LEFT, DEFAULT_RECT_WIDTH, DEFAULT_RECT_HEIGHT),
        }
    }
}

impl LayoutConfig {
    /// Build config from environment variables, defaulting anything absent.
    ///
    /// Optional:
    /// - `CANVAS_GRID_COLUMNS`: default 43
    /// - `CANVAS_ROW_PITCH_PX`: default 10
    /// - `CANVAS_SNAP_TO_GRID`: `true`/`false`, default false
    /// - `CANVAS_HEIGHT_PX`: default 2400
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` if the grid would be degenerate.
    pub fn from_env() -> Result<Self, LayoutError> {
        let defaults = Self::default();
        let config = Self {
            grid_columns: env_parse("CANVAS_GRID_COLUMNS", defaults.grid_columns),
            row_pitch_px: env_parse("CANVAS_ROW_PITCH_PX", defaults.row_pitch_px),
            snap_to_grid: env_parse("CANVAS_SNAP_TO_GRID", defaults.snap_to_grid),
            canvas_height_px: env_parse("CANVAS_HEIGHT_PX", defaults.canvas_height_px),
            default_rect: defaults.default_rect,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigParse` for zero columns or a non-positive row pitch.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.grid_columns == 0 {
            return Err(LayoutError::ConfigParse("grid_columns must be at least 1".into()));
        }
        if self.row_pitch_px <= 0.0 || !self.row_pitch_px.is_finite() {
            return Err(LayoutError::ConfigParse(format!("row_pitch_px must be positive, got {}", self.row_pitch_px)));
        }
        Ok(())
    }

    /// Factor converting a pixel width delta into layout width units.
    #[must_use]
    pub fn width_scale(&self) -> f64 {
        f64::from(self.grid_columns)
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key).map_or(default, |v| v.trim().parse::<T>().unwrap_or(default))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
