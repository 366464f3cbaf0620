//! Identity collaborators: display-name generation and id generation.

#[cfg(test)]
#[path = "naming_test.rs"]
mod naming_test;

use uuid::Uuid;

use crate::layout::{CanvasState, ComponentId};

/// Produces display names that do not collide with names already on the canvas.
pub trait NameGenerator {
    fn unique_name(&self, type_name: &str, existing: &CanvasState) -> String;
}

/// Names of the form `<lowercased type><n>`, where counting starts after the
/// number of existing components of the same type and skips taken names.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialNames;

impl NameGenerator for SequentialNames {
    fn unique_name(&self, type_name: &str, existing: &CanvasState) -> String {
        let prefix = type_name.to_lowercase();
        let same_kind = existing.iter().filter(|entry| entry.component.type_name == type_name).count();
        let taken = |name: &str| existing.iter().any(|entry| entry.component.name == name);

        let mut n = same_kind + 1;
        loop {
            let candidate = format!("{prefix}{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Source of fresh, globally unique component ids.
pub trait IdGenerator {
    fn new_id(&mut self) -> ComponentId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn new_id(&mut self) -> ComponentId {
        ComponentId::new(Uuid::new_v4().to_string())
    }
}
