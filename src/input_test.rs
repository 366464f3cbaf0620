use super::*;

fn placed_drag(id: &str, breakpoint: Breakpoint) -> GestureState {
    GestureState::DraggingComponent {
        id: ComponentId::new(id),
        breakpoint,
        origin: None,
        last_pointer: Point::new(0.0, 0.0),
    }
}

#[test]
fn palette_item_is_new() {
    let item = DragItem::palette("Button", Breakpoint::Desktop);
    assert!(item.is_new());
    assert_eq!(item.source, DragSource::Palette { type_name: "Button".into() });
}

#[test]
fn placed_item_is_not_new() {
    let item = DragItem::placed(ComponentId::new("a"), Breakpoint::Mobile);
    assert!(!item.is_new());
    assert_eq!(item.breakpoint, Breakpoint::Mobile);
    assert_eq!(item.source, DragSource::Placed { id: ComponentId::new("a") });
}

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.breakpoint, Breakpoint::Desktop);
    assert!((ui.zoom_level - 1.0).abs() < f64::EPSILON);
    assert!(!ui.snap_to_grid);
    assert!(ui.selected_id.is_none());
}

#[test]
fn idle_is_default_and_inactive() {
    let g = GestureState::default();
    assert_eq!(g, GestureState::Idle);
    assert!(!g.is_active());
    assert!(g.target().is_none());
}

#[test]
fn dragging_component_targets_id() {
    let g = placed_drag("a", Breakpoint::Desktop);
    assert!(g.is_active());
    assert_eq!(g.target(), Some(&ComponentId::new("a")));
}

#[test]
fn new_drag_has_no_target() {
    let g = GestureState::DraggingNew { type_name: "Button".into(), last_pointer: Point::new(0.0, 0.0) };
    assert!(g.is_active());
    assert!(g.target().is_none());
}

#[test]
fn breakpoint_for_matches_only_target() {
    let g = placed_drag("a", Breakpoint::Mobile);
    assert_eq!(g.breakpoint_for(&ComponentId::new("a")), Some(Breakpoint::Mobile));
    assert_eq!(g.breakpoint_for(&ComponentId::new("b")), None);
    assert_eq!(GestureState::Idle.breakpoint_for(&ComponentId::new("a")), None);
}

#[test]
fn resize_breakpoint_for() {
    let g = GestureState::ResizingComponent { id: ComponentId::new("a"), breakpoint: Breakpoint::Desktop, origin: None };
    assert_eq!(g.breakpoint_for(&ComponentId::new("a")), Some(Breakpoint::Desktop));
}

#[test]
fn track_pointer_updates_drags() {
    let mut g = placed_drag("a", Breakpoint::Desktop);
    assert!(g.track_pointer(Point::new(5.0, 6.0)));
    let GestureState::DraggingComponent { last_pointer, .. } = g else {
        panic!("expected drag");
    };
    assert_eq!(last_pointer, Point::new(5.0, 6.0));
}

#[test]
fn track_pointer_ignored_when_idle_or_resizing() {
    let mut idle = GestureState::Idle;
    assert!(!idle.track_pointer(Point::new(1.0, 1.0)));
    let mut resizing =
        GestureState::ResizingComponent { id: ComponentId::new("a"), breakpoint: Breakpoint::Desktop, origin: None };
    assert!(!resizing.track_pointer(Point::new(1.0, 1.0)));
}
