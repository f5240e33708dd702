//! Identity handles for circuit components.

use std::fmt;

/// A unique identifier for a component in the circuit.
///
/// The handle is the component's identity: two handles compare equal only
/// when they name the same component, whatever that component contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

impl ComponentId {
    /// Get the raw index of this handle.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}
