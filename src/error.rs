//! Error taxonomy for layout operations.
//!
//! Every failure is local to the gesture that produced it. Pure operations
//! return `Result<_, LayoutError>`; the engine logs the error and drops the
//! gesture without committing anything.

use crate::layout::ComponentId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("component not found: {0}")]
    ComponentNotFound(ComponentId),
    #[error("canvas geometry unavailable")]
    GeometryUnavailable,
    #[error("invalid canvas width: {0}")]
    InvalidCanvasWidth(f64),
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),
    #[error("invalid template for {type_name}: {reason}")]
    InvalidTemplate { type_name: String, reason: String },
    #[error("invalid canvas document: {0}")]
    InvalidDocument(String),
    #[error("config parse error: {0}")]
    ConfigParse(String),
}

impl LayoutError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ComponentNotFound(_) => "E_COMPONENT_NOT_FOUND",
            Self::GeometryUnavailable => "E_GEOMETRY_UNAVAILABLE",
            Self::InvalidCanvasWidth(_) => "E_INVALID_CANVAS_WIDTH",
            Self::UnknownComponentType(_) => "E_UNKNOWN_COMPONENT_TYPE",
            Self::InvalidTemplate { .. } => "E_INVALID_TEMPLATE",
            Self::InvalidDocument(_) => "E_INVALID_DOCUMENT",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
