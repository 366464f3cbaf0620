//! Shared numeric constants for the layout engine.

// ── Grid ────────────────────────────────────────────────────────

/// Number of grid columns across the canvas width. Also the divisor that turns
/// a pixel width delta into layout width units.
pub const GRID_COLUMNS: u32 = 43;

/// Vertical snap pitch in pixels.
pub const GRID_ROW_PITCH_PX: f64 = 10.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Fixed logical height of the canvas surface in pixels.
pub const CANVAS_HEIGHT_PX: f64 = 2400.0;

// ── Fallback geometry ───────────────────────────────────────────

/// `top` of the rect substituted when a resized component has no layout for the breakpoint.
pub const DEFAULT_RECT_TOP: f64 = 100.0;

/// `left` of the fallback rect, in percent.
pub const DEFAULT_RECT_LEFT: f64 = 0.0;

/// `width` of the fallback rect, in layout width units.
pub const DEFAULT_RECT_WIDTH: f64 = 445.0;

/// `height` of the fallback rect, in pixels.
pub const DEFAULT_RECT_HEIGHT: f64 = 500.0;
