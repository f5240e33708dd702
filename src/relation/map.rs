//! The replacement relation and its mutation, freeze and query API.

use std::fmt;
use std::io;
use std::sync::Arc;

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::store::{EntitySet, RelationStore};
use super::Entity;
use crate::error::{ReplacementError, Result};

/// Renders an entity in diagnostics.
pub type EntityLabel<E> = Arc<dyn Fn(&E) -> String + Send + Sync>;

/// Records which entities replaced which during one or more edits.
///
/// The relation is kept in two mirrored views. `forward[a]` holds the
/// entities `a` was replaced by and `inverse[b]` the entities `b` was
/// replaced from; `b ∈ forward[a]` exactly when `a ∈ inverse[b]`.
/// A forward key with no targets is a removal, an inverse key with no
/// sources is an addition.
///
/// Once [`freeze`](Self::freeze) is called the relation is read-only and
/// every mutating call returns [`ReplacementError::Immutable`].
#[derive(Clone)]
pub struct ReplacementMap<E: Entity> {
    pub(crate) store: RelationStore<E>,
    frozen: bool,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
    label: Option<EntityLabel<E>>,
}

impl<E: Entity> ReplacementMap<E> {
    /// Create an empty relation reporting diagnostics through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Create an empty relation reporting diagnostics to `sink`.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            store: RelationStore::new(),
            frozen: false,
            sink,
            label: None,
        }
    }

    /// Create a relation holding the single replacement `old -> new`.
    pub fn with_replacement(old: E, new: E) -> Self {
        let mut map = Self::new();
        map.store.link(&old, [&new]);
        map
    }

    /// Replace the diagnostic sink of this instance.
    pub fn set_sink(&mut self, sink: Arc<dyn DiagnosticSink>) {
        self.sink = sink;
    }

    /// Render entities with `label` in diagnostics instead of `Debug`.
    pub fn set_label(&mut self, label: EntityLabel<E>) {
        self.label = Some(label);
    }

    pub(crate) fn describe(&self, entity: &E) -> String {
        match &self.label {
            Some(label) => label(entity),
            None => format!("{:?}", entity),
        }
    }

    pub(crate) fn ensure_mutable(&self, operation: &'static str) -> Result<()> {
        if self.frozen {
            return Err(ReplacementError::immutable(operation));
        }
        Ok(())
    }

    // ============ Mutation ============

    /// Record `entity` as newly present, replacing nothing.
    ///
    /// Sources already recorded for `entity` are kept.
    pub fn add(&mut self, entity: E) -> Result<()> {
        self.ensure_mutable("add")?;
        self.store.ensure_source(&entity);
        Ok(())
    }

    /// Record that `old` was replaced by every entity in `news`.
    ///
    /// An empty `news` leaves `old` marked as removed.
    pub fn put<'a, I>(&mut self, old: &E, news: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        self.ensure_mutable("put")?;
        self.store.link(old, news);
        Ok(())
    }

    /// Record that `entity` was replaced by nothing.
    pub fn remove(&mut self, entity: E) -> Result<()> {
        self.ensure_mutable("remove")?;
        self.store.link(&entity, std::iter::empty());
        Ok(())
    }

    /// Record the single replacement `old -> new`.
    pub fn replace(&mut self, old: E, new: E) -> Result<()> {
        self.put(&old, [&new])
    }

    /// Forget every recorded replacement so the instance can be reused.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_mutable("reset")?;
        self.store.clear();
        Ok(())
    }

    // ============ Freeze ============

    /// Make the relation read-only. Irreversible.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    // ============ Queries ============

    /// The entities `old` was replaced by, or `None` if `old` is untracked.
    pub fn get(&self, old: &E) -> Option<&EntitySet<E>> {
        self.store.forward.get(old)
    }

    /// Alias of [`get`](Self::get).
    pub fn components_replacing(&self, old: &E) -> Option<&EntitySet<E>> {
        self.get(old)
    }

    /// The entities `new` was replaced from, or `None` if `new` is untracked.
    pub fn sources_of(&self, new: &E) -> Option<&EntitySet<E>> {
        self.store.inverse.get(new)
    }

    /// Entities affected by replacement or removal.
    pub fn replaced_components(&self) -> impl Iterator<Item = &E> + '_ {
        self.store.forward.keys()
    }

    /// Same key set as [`replaced_components`](Self::replaced_components).
    pub fn removals(&self) -> impl Iterator<Item = &E> + '_ {
        self.store.forward.keys()
    }

    /// Entities present after the edit.
    pub fn additions(&self) -> impl Iterator<Item = &E> + '_ {
        self.store.inverse.keys()
    }

    /// Every forward entry as `(old, targets)`.
    pub fn replacements(&self) -> impl Iterator<Item = (&E, &EntitySet<E>)> + '_ {
        self.store.forward.iter()
    }

    /// The relation describing the reverse edit.
    ///
    /// The result is a fresh, unfrozen relation sharing this one's sink.
    pub fn inverse_map(&self) -> Self {
        Self {
            store: self.store.swapped(),
            frozen: false,
            sink: Arc::clone(&self.sink),
            label: self.label.clone(),
        }
    }

    /// A mutable copy of this relation, even if it is frozen.
    pub fn unfrozen_copy(&self) -> Self {
        Self {
            frozen: false,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ============ Listing ============

    /// Write the removals and additions listing to `out`.
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        E: fmt::Display,
    {
        self.print_labeled(out, |e| e.to_string())
    }

    /// Write the listing, rendering each entity with `label`.
    pub fn print_labeled<W, F>(&self, out: &mut W, label: F) -> io::Result<()>
    where
        W: io::Write,
        F: Fn(&E) -> String,
    {
        out.write_all(self.render_listing(label).as_bytes())
    }

    fn render_listing<F>(&self, label: F) -> String
    where
        F: Fn(&E) -> String,
    {
        let mut text = String::new();
        for (category, keys) in [
            ("removals", self.store.forward.keys()),
            ("additions", self.store.inverse.keys()),
        ] {
            let mut labels: Vec<String> = keys.map(&label).collect();
            if labels.is_empty() {
                text.push_str(&format!("  {}: none\n", category));
                continue;
            }
            labels.sort();
            text.push_str(&format!("  {}:\n", category));
            for l in labels {
                text.push_str(&format!("    {}\n", l));
            }
        }
        text
    }
}

impl<E: Entity> Default for ReplacementMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Relations compare by their forward and inverse views only.
impl<E: Entity> PartialEq for ReplacementMap<E> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<E: Entity> Eq for ReplacementMap<E> {}

impl<E: Entity> fmt::Debug for ReplacementMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplacementMap")
            .field("forward", &self.store.forward)
            .field("inverse", &self.store.inverse)
            .field("frozen", &self.frozen)
            .finish()
    }
}

impl<E: Entity + fmt::Display> fmt::Display for ReplacementMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_listing(|e| e.to_string()))
    }
}
