//! Browser geometry probe backed by `getBoundingClientRect`.

use web_sys::Element;

use crate::geometry::GeometryProbe;
use crate::transform::Rect;

/// Class name the canvas root element carries.
pub const CANVAS_ROOT_CLASS: &str = "real-canvas";

/// Measures a DOM element. The element is looked up on every measurement so a
/// remounted canvas is picked up without rebuilding the probe.
#[derive(Debug, Clone)]
pub struct DomGeometryProbe {
    class_name: String,
}

impl DomGeometryProbe {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into() }
    }

    fn element(&self) -> Option<Element> {
        let document = web_sys::window()?.document()?;
        document.get_elements_by_class_name(&self.class_name).item(0)
    }
}

impl Default for DomGeometryProbe {
    fn default() -> Self {
        Self::new(CANVAS_ROOT_CLASS)
    }
}

impl GeometryProbe for DomGeometryProbe {
    fn canvas_rect(&self) -> Option<Rect> {
        let bounds = self.element()?.get_bounding_client_rect();
        Some(Rect::new(bounds.x(), bounds.y(), bounds.width(), bounds.height()))
    }
}
