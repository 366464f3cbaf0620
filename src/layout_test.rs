#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use serde_json::json;

use super::*;

fn rect(top: f64, left: f64, width: f64, height: f64) -> LayoutRect {
    LayoutRect::new(top, left, width, height)
}

fn make_entry(id: &str, layouts: &[(Breakpoint, LayoutRect)]) -> ComponentEntry {
    ComponentEntry {
        id: ComponentId::new(id),
        component: ComponentMeta {
            type_name: "Button".into(),
            name: format!("button_{id}"),
            definition: ComponentDefinition::default(),
        },
        layouts: layouts.iter().copied().collect(),
        parent_id: None,
    }
}

fn desktop_entry(id: &str) -> ComponentEntry {
    make_entry(id, &[(Breakpoint::Desktop, rect(10.0, 5.0, 6.0, 40.0))])
}

// =============================================================
// ComponentId / Breakpoint
// =============================================================

#[test]
fn component_id_serializes_as_plain_string() {
    let id = ComponentId::new("abc");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    assert_eq!(id.to_string(), "abc");
    assert_eq!(ComponentId::from("abc"), id);
}

#[test]
fn breakpoint_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&Breakpoint::Desktop).unwrap(), "\"desktop\"");
    assert_eq!(serde_json::to_string(&Breakpoint::Mobile).unwrap(), "\"mobile\"");
    let back: Breakpoint = serde_json::from_str("\"mobile\"").unwrap();
    assert_eq!(back, Breakpoint::Mobile);
}

#[test]
fn breakpoint_rejects_unknown_name() {
    assert!(serde_json::from_str::<Breakpoint>("\"tablet\"").is_err());
}

#[test]
fn breakpoint_default_is_desktop() {
    assert_eq!(Breakpoint::default(), Breakpoint::Desktop);
}

// =============================================================
// LayoutRect / PartialLayoutRect
// =============================================================

#[test]
fn apply_empty_patch_changes_nothing() {
    let mut r = rect(1.0, 2.0, 3.0, 4.0);
    let patch = PartialLayoutRect::default();
    assert!(patch.is_empty());
    r.apply(&patch);
    assert_eq!(r, rect(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn position_patch_only_moves() {
    let mut r = rect(1.0, 2.0, 3.0, 4.0);
    r.apply(&PartialLayoutRect::position(50.0, 25.0));
    assert_eq!(r, rect(50.0, 25.0, 3.0, 4.0));
}

#[test]
fn partial_rect_skips_absent_fields_when_serialized() {
    let json = serde_json::to_value(PartialLayoutRect::position(1.0, 2.0)).unwrap();
    assert_eq!(json, json!({ "top": 1.0, "left": 2.0 }));
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_defaults_to_both() {
    let v = Visibility::default();
    assert!(v.shows_on(Breakpoint::Desktop));
    assert!(v.shows_on(Breakpoint::Mobile));
}

#[test]
fn mobile_only_hides_on_desktop() {
    let v = Visibility::mobile_only();
    assert!(!v.shows_on(Breakpoint::Desktop));
    assert!(v.shows_on(Breakpoint::Mobile));
}

#[test]
fn visibility_uses_camel_case_flags() {
    let json = serde_json::to_value(Visibility::mobile_only()).unwrap();
    assert_eq!(json, json!({ "showOnDesktop": false, "showOnMobile": true }));
}

#[test]
fn is_visible_reads_definition_flags() {
    let mut entry = desktop_entry("a");
    entry.component.definition.visibility = Visibility { show_on_desktop: true, show_on_mobile: false };
    assert!(is_visible(&entry, Breakpoint::Desktop));
    assert!(!is_visible(&entry, Breakpoint::Mobile));
}

// =============================================================
// ComponentEntry
// =============================================================

#[test]
fn entry_layout_lookup_by_breakpoint() {
    let entry = desktop_entry("a");
    assert!(entry.layout(Breakpoint::Desktop).is_some());
    assert!(entry.layout(Breakpoint::Mobile).is_none());
}

#[test]
fn entry_with_parent_is_not_root() {
    let mut entry = desktop_entry("child");
    assert!(entry.is_root());
    entry.parent_id = Some(ComponentId::new("container"));
    assert!(!entry.is_root());
}

#[test]
fn entry_serializes_with_document_field_names() {
    let entry = desktop_entry("a");
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], "a");
    assert_eq!(json["component"]["typeName"], "Button");
    assert_eq!(json["layouts"]["desktop"]["left"], 5.0);
    assert!(json["parentId"].is_null());
}

// =============================================================
// CanvasState
// =============================================================

#[test]
fn new_state_is_empty() {
    let state = CanvasState::new();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
}

#[test]
fn insert_then_get() {
    let mut state = CanvasState::new();
    assert!(state.insert(desktop_entry("a")).unwrap().is_none());
    assert!(state.contains(&ComponentId::new("a")));
    assert_eq!(state.get(&ComponentId::new("a")).unwrap().component.name, "button_a");
}

#[test]
fn insert_replaces_same_id() {
    let mut state = CanvasState::new();
    state.insert(desktop_entry("a")).unwrap();
    let mut replacement = desktop_entry("a");
    replacement.component.name = "renamed".into();
    let previous = state.insert(replacement).unwrap();
    assert_eq!(previous.unwrap().component.name, "button_a");
    assert_eq!(state.len(), 1);
}

#[test]
fn insert_rejects_entry_without_layouts() {
    let mut state = CanvasState::new();
    let err = state.insert(make_entry("a", &[])).unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_DOCUMENT");
    assert!(state.is_empty());
}

#[test]
fn remove_returns_entry() {
    let mut state = CanvasState::new();
    state.insert(desktop_entry("a")).unwrap();
    let removed = state.remove(&ComponentId::new("a"));
    assert!(removed.is_some());
    assert!(state.is_empty());
    assert!(state.remove(&ComponentId::new("a")).is_none());
}

#[test]
fn from_entries_rejects_duplicates() {
    let err = CanvasState::from_entries([desktop_entry("a"), desktop_entry("a")]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDocument(_)));
}

#[test]
fn root_components_filter_parent_and_visibility() {
    let mut child = desktop_entry("child");
    child.parent_id = Some(ComponentId::new("b"));
    let mut hidden = desktop_entry("hidden");
    hidden.component.definition.visibility = Visibility::mobile_only();
    let state = CanvasState::from_entries([desktop_entry("b"), desktop_entry("a"), child, hidden]).unwrap();

    let ids: Vec<&str> = state.root_components(Breakpoint::Desktop).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let mobile: Vec<&str> = state.root_components(Breakpoint::Mobile).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(mobile, vec!["a", "b", "hidden"]);
}

#[test]
fn json_roundtrip_preserves_everything() {
    let mut entry = make_entry(
        "a",
        &[(Breakpoint::Desktop, rect(100.0, 30.0, 6.0, 40.0)), (Breakpoint::Mobile, rect(20.0, 0.0, 43.0, 40.0))],
    );
    entry.component.definition.properties.insert("text".into(), json!({ "value": "Click" }));
    entry.parent_id = Some(ComponentId::new("container"));
    let state = CanvasState::from_entries([entry, desktop_entry("container")]).unwrap();

    let json = state.to_json().unwrap();
    let back = CanvasState::from_json(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn from_json_rejects_entry_without_layouts() {
    let json = json!({
        "components": {
            "a": {
                "id": "a",
                "component": { "typeName": "Button", "name": "button1", "definition": {} },
                "layouts": {}
            }
        }
    });
    let err = CanvasState::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDocument(_)));
}

#[test]
fn from_json_rejects_key_id_mismatch() {
    let json = json!({
        "components": {
            "a": {
                "id": "b",
                "component": { "typeName": "Button", "name": "button1", "definition": {} },
                "layouts": { "desktop": { "top": 0.0, "left": 0.0, "width": 1.0, "height": 1.0 } }
            }
        }
    });
    assert!(CanvasState::from_json(&json.to_string()).is_err());
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(CanvasState::from_json("{ not json"), Err(LayoutError::InvalidDocument(_))));
}

#[test]
fn definition_fields_default_when_absent() {
    let def: ComponentDefinition = serde_json::from_str("{}").unwrap();
    assert!(def.properties.is_empty());
    assert!(def.styles.is_empty());
    assert_eq!(def.visibility, Visibility::default());
}
