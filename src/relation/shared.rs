//! A relation shared between one editing thread and any number of readers.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::map::ReplacementMap;
use super::Entity;
use crate::error::Result;

/// Shared handle to a [`ReplacementMap`].
///
/// Readers take a read guard and always observe the relation between two
/// complete operations. The writer goes through [`update`](Self::update),
/// which holds the write lock for the whole closure, so a composition is
/// never seen half-applied.
pub struct SharedReplacementMap<E: Entity> {
    inner: Arc<RwLock<ReplacementMap<E>>>,
}

impl<E: Entity> SharedReplacementMap<E> {
    pub fn new(map: ReplacementMap<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Lock the relation for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, ReplacementMap<E>> {
        self.inner.read()
    }

    /// Run `f` against the relation under the write lock.
    ///
    /// Fails without calling `f` once the relation is frozen.
    pub fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ReplacementMap<E>) -> Result<T>,
    {
        let mut map = self.inner.write();
        map.ensure_mutable("update")?;
        f(&mut *map)
    }

    /// Freeze the relation in place.
    pub fn freeze(&self) {
        self.inner.write().freeze();
    }

    pub fn is_frozen(&self) -> bool {
        self.inner.read().is_frozen()
    }

    /// A private copy of the relation as it is now.
    pub fn snapshot(&self) -> ReplacementMap<E> {
        self.inner.read().clone()
    }
}

impl<E: Entity> Clone for SharedReplacementMap<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> From<ReplacementMap<E>> for SharedReplacementMap<E> {
    fn from(map: ReplacementMap<E>) -> Self {
        Self::new(map)
    }
}
