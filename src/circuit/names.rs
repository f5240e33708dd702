//! Name interning for components referenced by edit scripts.

use std::collections::HashMap;

use super::types::ComponentId;

/// Bidirectional mapping between component names and their handles.
///
/// Handles are assigned in first-seen order, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct ComponentNames {
    /// Mapping from component names to handles
    name_map: HashMap<String, ComponentId>,

    /// Reverse mapping from handles to names (for listings)
    names: Vec<String>,
}

impl ComponentNames {
    /// Create an empty name table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the handle for a name, assigning a fresh one if it is new.
    pub fn intern(&mut self, name: &str) -> ComponentId {
        if let Some(id) = self.name_map.get(name) {
            return *id;
        }
        let id = ComponentId(self.names.len());
        self.name_map.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Find a handle by name.
    pub fn find(&self, name: &str) -> Option<ComponentId> {
        self.name_map.get(name).copied()
    }

    /// Get the name of a component, falling back to its handle.
    pub fn name(&self, id: ComponentId) -> String {
        self.names
            .get(id.0)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    /// Number of interned components.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no component has been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
