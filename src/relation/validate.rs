//! Relation validation.

use super::map::ReplacementMap;
use super::Entity;
use crate::error::{ReplacementError, Result};

/// Validate that a relation's forward and inverse views mirror each other.
///
/// Checks, for every pair of entities:
/// - each forward edge `a -> b` has the inverse edge `b <- a`
/// - each inverse edge `b <- a` has the forward edge `a -> b`
pub fn validate_relation<E: Entity>(map: &ReplacementMap<E>) -> Result<()> {
    let store = &map.store;

    for (a, targets) in &store.forward {
        for b in targets {
            let mirrored = store
                .inverse
                .get(b)
                .map_or(false, |sources| sources.contains(a));
            if !mirrored {
                return Err(ReplacementError::invariant(format!(
                    "{:?} -> {:?} has no inverse edge",
                    a, b
                )));
            }
        }
    }

    for (b, sources) in &store.inverse {
        for a in sources {
            let mirrored = store
                .forward
                .get(a)
                .map_or(false, |targets| targets.contains(b));
            if !mirrored {
                return Err(ReplacementError::invariant(format!(
                    "{:?} <- {:?} has no forward edge",
                    b, a
                )));
            }
        }
    }

    Ok(())
}
