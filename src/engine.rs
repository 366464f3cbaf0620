use crate::catalog::ComponentCatalog;
use crate::config::LayoutConfig;
use crate::dom::DomGeometryProbe;
use crate::drop::{DragContext, Inserter, insert_component};
use crate::error::LayoutError;
use crate::geometry::GeometryProbe;
use crate::grid::GridSnapper;
use crate::input::{DragItem, DragSource, GestureState, UiState};
use crate::layout::{Breakpoint, CanvasState, ComponentEntry, ComponentId, LayoutRect};
use crate::mutation::{self, ResizeDelta};
use crate::naming::{IdGenerator, NameGenerator, SequentialNames, UuidIds};
use crate::transform::{Point, Rect, to_percentage};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from gesture handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ComponentCreated(ComponentEntry),
    LayoutUpdated { id: ComponentId, breakpoint: Breakpoint, rect: LayoutRect },
    PropertiesUpdated { id: ComponentId },
    ComponentsRemoved { ids: Vec<ComponentId> },
    /// Show or hide the grid background while a gesture is in progress.
    ShowGrid(bool),
    RenderNeeded,
}

/// Callback invoked with the committed state after every mutation.
pub type LayoutListener = Box<dyn FnMut(&CanvasState)>;

/// Editing session: owns the canvas state and turns gestures into committed mutations.
///
/// Handlers never return errors. A failed gesture is logged and produces no
/// mutation and no state-changing action.
pub struct EngineCore {
    canvas: CanvasState,
    pub config: LayoutConfig,
    pub ui: UiState,
    pub gesture: GestureState,
    snapper: GridSnapper,
    catalog: Box<dyn ComponentCatalog>,
    probe: Box<dyn GeometryProbe>,
    names: Box<dyn NameGenerator>,
    ids: Box<dyn IdGenerator>,
    listeners: Vec<LayoutListener>,
}

impl EngineCore {
    /// Create a session with default config, sequential names, and UUID ids.
    #[must_use]
    pub fn new(catalog: Box<dyn ComponentCatalog>, probe: Box<dyn GeometryProbe>) -> Self {
        Self::with_config(LayoutConfig::default(), catalog, probe)
    }

    #[must_use]
    pub fn with_config(
        config: LayoutConfig,
        catalog: Box<dyn ComponentCatalog>,
        probe: Box<dyn GeometryProbe>,
    ) -> Self {
        Self {
            canvas: CanvasState::new(),
            config,
            ui: UiState { snap_to_grid: config.snap_to_grid, ..UiState::default() },
            gesture: GestureState::Idle,
            snapper: GridSnapper::from_config(&config),
            catalog,
            probe,
            names: Box::new(SequentialNames),
            ids: Box::new(UuidIds),
            listeners: Vec::new(),
        }
    }

    /// Session measuring the `real-canvas` element of the current document.
    #[must_use]
    pub fn for_browser(config: LayoutConfig, catalog: Box<dyn ComponentCatalog>) -> Self {
        Self::with_config(config, catalog, Box::new(DomGeometryProbe::default()))
    }

    #[must_use]
    pub fn with_names(mut self, names: Box<dyn NameGenerator>) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn with_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    // --- Data inputs ---

    /// Replace the canvas with a persisted one. Listeners are not notified;
    /// this is hydration, not an edit.
    pub fn load(&mut self, canvas: CanvasState) {
        self.canvas = canvas;
        self.gesture = GestureState::Idle;
        if self.ui.selected_id.as_ref().is_some_and(|selected| !self.canvas.contains(selected)) {
            self.ui.selected_id = None;
        }
    }

    /// Parse and load a persisted canvas.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if the JSON is malformed or breaks an invariant.
    pub fn load_json(&mut self, json: &str) -> Result<(), LayoutError> {
        let canvas = CanvasState::from_json(json)?;
        self.load(canvas);
        Ok(())
    }

    /// Register a listener called after every committed mutation.
    pub fn on_layout_changed(&mut self, listener: impl FnMut(&CanvasState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // --- Ambient state ---

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.ui.breakpoint = breakpoint;
    }

    pub fn set_zoom(&mut self, zoom_level: f64) {
        if zoom_level.is_finite() && zoom_level > 0.0 {
            self.ui.zoom_level = zoom_level;
        } else {
            tracing::warn!(zoom_level, "ignoring invalid zoom level");
        }
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.ui.snap_to_grid = enabled;
    }

    pub fn select(&mut self, id: Option<ComponentId>) {
        self.ui.selected_id = id.filter(|id| self.canvas.contains(id));
    }

    // --- Drag and drop ---

    /// Begin dragging `item`. Any gesture already in progress is abandoned.
    pub fn on_drag_start(&mut self, item: &DragItem, pointer: Point) -> Vec<Action> {
        let next = match &item.source {
            DragSource::Palette { type_name } => {
                GestureState::DraggingNew { type_name: type_name.clone(), last_pointer: pointer }
            }
            DragSource::Placed { id } => {
                let Some(entry) = self.canvas.get(id) else {
                    log_dropped("drag_start", &LayoutError::ComponentNotFound(id.clone()));
                    self.gesture = GestureState::Idle;
                    return Vec::new();
                };
                GestureState::DraggingComponent {
                    id: id.clone(),
                    breakpoint: item.breakpoint,
                    origin: entry.layout(item.breakpoint).copied(),
                    last_pointer: pointer,
                }
            }
        };
        self.gesture = next;
        vec![Action::ShowGrid(true)]
    }

    /// Intermediate pointer tick. Never mutates the canvas.
    pub fn on_drag_move(&mut self, pointer: Point) -> Vec<Action> {
        if self.gesture.track_pointer(pointer) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Drop `item` onto the canvas at client-space `pointer`.
    ///
    /// Palette items become new components. Placed components are committed
    /// by [`EngineCore::on_drag_stop`] instead, so dropping one here only ends
    /// the gesture.
    pub fn on_drop(&mut self, item: &DragItem, pointer: Point) -> Vec<Action> {
        let was_active = self.end_gesture();
        let mut actions = Vec::new();

        if let DragSource::Palette { type_name } = &item.source {
            match self.insert(type_name, item.breakpoint, pointer) {
                Ok(entry) => {
                    self.ui.selected_id = Some(entry.id.clone());
                    self.notify();
                    actions.push(Action::ComponentCreated(entry));
                }
                Err(e) => log_dropped("drop", &e),
            }
        }

        if was_active || !actions.is_empty() {
            actions.push(Action::ShowGrid(false));
        }
        actions
    }

    fn insert(&mut self, type_name: &str, breakpoint: Breakpoint, pointer: Point) -> Result<ComponentEntry, LayoutError> {
        let ctx = DragContext::measure(self.probe.as_ref(), self.ui.zoom_level, breakpoint, self.ui.snap_to_grid)?;
        let mut inserter = Inserter {
            catalog: self.catalog.as_ref(),
            names: self.names.as_ref(),
            ids: self.ids.as_mut(),
            snapper: &self.snapper,
        };
        insert_component(&mut self.canvas, &ctx, &mut inserter, type_name, pointer)
    }

    /// Commit the final position of a dragged component.
    ///
    /// `node` is the component's rendered rect in client pixels; the new
    /// layout is its offset from the canvas rect. A stop that matches no drag
    /// in progress (cancelled, or never started) commits nothing.
    pub fn on_drag_stop(&mut self, id: &ComponentId, node: Rect) -> Vec<Action> {
        let Some(breakpoint) = self.stopped_gesture_breakpoint("drag_stop", id) else {
            return vec![Action::ShowGrid(false)];
        };

        let result = self.probe.measure().and_then(|canvas| {
            let left = to_percentage(node.x - canvas.x, canvas.width)?;
            let top = node.y - canvas.y;
            mutation::move_component(&mut self.canvas, &self.config, id, breakpoint, top, left)
        });
        self.committed_layout("drag_stop", id, breakpoint, result)
    }

    // --- Resize ---

    pub fn on_resize_start(&mut self, id: &ComponentId) -> Vec<Action> {
        let Some(entry) = self.canvas.get(id) else {
            log_dropped("resize_start", &LayoutError::ComponentNotFound(id.clone()));
            return Vec::new();
        };
        let breakpoint = self.ui.breakpoint;
        self.gesture =
            GestureState::ResizingComponent { id: id.clone(), breakpoint, origin: entry.layout(breakpoint).copied() };
        vec![Action::ShowGrid(true)]
    }

    /// Commit a finished resize. Ignored unless a resize of `id` is in progress.
    pub fn on_resize_stop(&mut self, id: &ComponentId, delta: ResizeDelta) -> Vec<Action> {
        let Some(breakpoint) = self.stopped_gesture_breakpoint("resize_stop", id) else {
            return vec![Action::ShowGrid(false)];
        };

        let result = self.probe.measure().and_then(|canvas| {
            mutation::resize_component(&mut self.canvas, &self.config, id, breakpoint, delta, canvas.width)
        });
        self.committed_layout("resize_stop", id, breakpoint, result)
    }

    /// Abort the gesture in progress. Nothing is committed.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        if self.end_gesture() { vec![Action::ShowGrid(false), Action::RenderNeeded] } else { Vec::new() }
    }

    fn end_gesture(&mut self) -> bool {
        std::mem::take(&mut self.gesture).is_active()
    }

    /// End the gesture and return the breakpoint it captured, or `None` when
    /// the gesture in progress does not target `id`.
    fn stopped_gesture_breakpoint(&mut self, gesture: &str, id: &ComponentId) -> Option<Breakpoint> {
        let breakpoint = self.gesture.breakpoint_for(id);
        self.end_gesture();
        if breakpoint.is_none() {
            tracing::warn!(gesture, %id, "stop without a matching gesture in progress; nothing committed");
        }
        breakpoint
    }

    fn committed_layout(
        &mut self,
        gesture: &str,
        id: &ComponentId,
        breakpoint: Breakpoint,
        result: Result<LayoutRect, LayoutError>,
    ) -> Vec<Action> {
        match result {
            Ok(rect) => {
                self.notify();
                vec![Action::LayoutUpdated { id: id.clone(), breakpoint, rect }, Action::ShowGrid(false)]
            }
            Err(e) => {
                log_dropped(gesture, &e);
                vec![Action::ShowGrid(false)]
            }
        }
    }

    // --- Properties and removal ---

    /// Set one property on a component. Empty values are a no-op.
    pub fn update_property(&mut self, id: &ComponentId, name: &str, value: serde_json::Value) -> Vec<Action> {
        match mutation::update_component_property(&mut self.canvas, id, name, value) {
            Ok(true) => {
                self.notify();
                vec![Action::PropertiesUpdated { id: id.clone() }]
            }
            Ok(false) => Vec::new(),
            Err(e) => {
                log_dropped("update_property", &e);
                Vec::new()
            }
        }
    }

    /// Set several properties on a component at once.
    pub fn update_properties(
        &mut self,
        id: &ComponentId,
        changes: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) -> Vec<Action> {
        match mutation::update_component_properties(&mut self.canvas, id, changes) {
            Ok(0) => Vec::new(),
            Ok(_) => {
                self.notify();
                vec![Action::PropertiesUpdated { id: id.clone() }]
            }
            Err(e) => {
                log_dropped("update_properties", &e);
                Vec::new()
            }
        }
    }

    /// Remove a component and everything nested in it.
    pub fn remove(&mut self, id: &ComponentId) -> Vec<Action> {
        match mutation::remove_component(&mut self.canvas, id) {
            Ok(removed) => {
                let ids: Vec<ComponentId> = removed.into_iter().map(|entry| entry.id).collect();
                if self.gesture.target().is_some_and(|target| ids.contains(target)) {
                    self.gesture = GestureState::Idle;
                }
                if self.ui.selected_id.as_ref().is_some_and(|selected| ids.contains(selected)) {
                    self.ui.selected_id = None;
                }
                self.notify();
                vec![Action::ComponentsRemoved { ids }]
            }
            Err(e) => {
                log_dropped("remove", &e);
                Vec::new()
            }
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.canvas);
        }
    }

    // --- Queries ---

    /// The committed canvas state.
    #[must_use]
    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    #[must_use]
    pub fn component(&self, id: &ComponentId) -> Option<&ComponentEntry> {
        self.canvas.get(id)
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ComponentId> {
        self.ui.selected_id.as_ref()
    }

    /// Components to render on the root canvas for the active breakpoint.
    #[must_use]
    pub fn root_components(&self) -> Vec<&ComponentEntry> {
        self.canvas.root_components(self.ui.breakpoint)
    }

    /// Logical canvas height in pixels, for sizing the canvas root.
    #[must_use]
    pub fn canvas_height_px(&self) -> f64 {
        self.config.canvas_height_px
    }

    /// `(cell_width, row_pitch)` of the grid background at the current canvas width.
    ///
    /// # Errors
    ///
    /// Returns `GeometryUnavailable` or `InvalidCanvasWidth`.
    pub fn grid_background_size(&self) -> Result<(f64, f64), LayoutError> {
        let canvas = self.probe.measure()?;
        self.snapper.background_size(canvas.width)
    }
}

fn log_dropped(gesture: &str, err: &LayoutError) {
    tracing::warn!(gesture, error = %err, code = err.error_code(), "gesture dropped");
}
