//! Mirrored forward/inverse containers.
//!
//! Every primitive here leaves the store satisfying
//! `b ∈ forward[a] ⇔ a ∈ inverse[b]`. Reasoning across entities belongs to
//! the callers in `map` and `compose`.

use rustc_hash::{FxHashMap, FxHashSet};

use super::{Entity, DEFAULT_SET_CAPACITY};

/// Set of entities on one side of a replacement.
pub type EntitySet<E> = FxHashSet<E>;

/// The two halves of a replacement relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelationStore<E: Entity> {
    /// Entity to the entities it was replaced by
    pub(crate) forward: FxHashMap<E, EntitySet<E>>,
    /// Entity to the entities it was replaced from
    pub(crate) inverse: FxHashMap<E, EntitySet<E>>,
}

pub(crate) fn empty_set<E: Entity>() -> EntitySet<E> {
    FxHashSet::with_capacity_and_hasher(DEFAULT_SET_CAPACITY, Default::default())
}

impl<E: Entity> RelationStore<E> {
    pub(crate) fn new() -> Self {
        Self {
            forward: FxHashMap::default(),
            inverse: FxHashMap::default(),
        }
    }

    /// Union `news` into `forward[old]` and `old` into each `inverse[new]`.
    pub(crate) fn link<'a, I>(&mut self, old: &E, news: I)
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let targets = self
            .forward
            .entry(old.clone())
            .or_insert_with(empty_set);
        for new in news {
            targets.insert(new.clone());
            self.inverse
                .entry(new.clone())
                .or_insert_with(empty_set)
                .insert(old.clone());
        }
    }

    /// Make sure `forward[entity]` exists.
    pub(crate) fn ensure_target(&mut self, entity: &E) -> &mut EntitySet<E> {
        self.forward.entry(entity.clone()).or_insert_with(empty_set)
    }

    /// Make sure `inverse[entity]` exists.
    pub(crate) fn ensure_source(&mut self, entity: &E) -> &mut EntitySet<E> {
        self.inverse.entry(entity.clone()).or_insert_with(empty_set)
    }

    /// Detach `inverse[entity]` from the store.
    ///
    /// The matching forward edges are left in place; the caller must
    /// rewire them before the operation completes.
    pub(crate) fn take_sources(&mut self, entity: &E) -> Option<EntitySet<E>> {
        self.inverse.remove(entity)
    }

    pub(crate) fn has_sources_entry(&self, entity: &E) -> bool {
        self.inverse.contains_key(entity)
    }

    pub(crate) fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }

    /// A copy with the two directions exchanged.
    pub(crate) fn swapped(&self) -> Self {
        Self {
            forward: self.inverse.clone(),
            inverse: self.forward.clone(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.inverse.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_mirrors_edges() {
        let mut store = RelationStore::new();
        store.link(&1u32, &[2, 3]);
        assert!(store.forward[&1].contains(&2));
        assert!(store.forward[&1].contains(&3));
        assert!(store.inverse[&2].contains(&1));
        assert!(store.inverse[&3].contains(&1));
    }

    #[test]
    fn test_link_without_targets_marks_removal() {
        let mut store = RelationStore::new();
        store.link(&9u32, &[]);
        assert!(store.forward[&9].is_empty());
        assert!(store.inverse.is_empty());
    }

    #[test]
    fn test_swapped() {
        let mut store = RelationStore::new();
        store.link(&1u32, &[2]);
        let swapped = store.swapped();
        assert!(swapped.forward[&2].contains(&1));
        assert!(swapped.inverse[&1].contains(&2));
        assert_eq!(swapped.swapped(), store);
    }

    #[test]
    fn test_clear() {
        let mut store = RelationStore::new();
        store.link(&1u32, &[2]);
        store.ensure_source(&5);
        assert!(!store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }
}
