use std::collections::{BTreeMap, HashSet};

use super::*;
use crate::layout::{Breakpoint, ComponentDefinition, ComponentEntry, ComponentMeta, LayoutRect};

fn entry(id: &str, type_name: &str, name: &str) -> ComponentEntry {
    ComponentEntry {
        id: ComponentId::new(id),
        component: ComponentMeta {
            type_name: type_name.into(),
            name: name.into(),
            definition: ComponentDefinition::default(),
        },
        layouts: BTreeMap::from([(Breakpoint::Desktop, LayoutRect::new(0.0, 0.0, 1.0, 1.0))]),
        parent_id: None,
    }
}

#[test]
fn first_component_gets_index_one() {
    let state = CanvasState::new();
    assert_eq!(SequentialNames.unique_name("Button", &state), "button1");
}

#[test]
fn counts_existing_components_of_same_type() {
    let state = CanvasState::from_entries([entry("a", "Button", "button1"), entry("b", "Table", "table1")]).unwrap();
    assert_eq!(SequentialNames.unique_name("Button", &state), "button2");
    assert_eq!(SequentialNames.unique_name("Table", &state), "table2");
}

#[test]
fn skips_taken_names() {
    // button1 was removed, leaving button2; the next candidate (button2) is taken.
    let state = CanvasState::from_entries([entry("b", "Button", "button2")]).unwrap();
    assert_eq!(SequentialNames.unique_name("Button", &state), "button3");
}

#[test]
fn skips_names_taken_by_other_types() {
    let state = CanvasState::from_entries([entry("a", "Text", "button1")]).unwrap();
    assert_eq!(SequentialNames.unique_name("Button", &state), "button2");
}

#[test]
fn uuid_ids_are_unique() {
    let mut ids = UuidIds;
    let generated: HashSet<ComponentId> = (0..100).map(|_| ids.new_id()).collect();
    assert_eq!(generated.len(), 100);
}

#[test]
fn uuid_ids_parse_as_uuid() {
    let id = UuidIds.new_id();
    assert!(Uuid::parse_str(id.as_str()).is_ok());
}
