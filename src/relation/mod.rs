//! Bidirectional replacement relations.
//!
//! A [`ReplacementMap`] records how a set of prior components was
//! substituted by a set of new ones during a structural edit, without
//! looking at what those components are. Two relations for consecutive
//! edits can be composed with [`ReplacementMap::append`] into the single
//! relation for both.
//!
//! ## Structure
//!
//! - `store` - the mirrored forward/inverse containers
//! - `map` - mutation, freeze and query API
//! - `compose` - composition of consecutive relations
//! - `diagnostics` - per-instance reporting of consistency problems
//! - `shared` - single-writer, multi-reader handle
//! - `validate` - invariant checking

mod compose;
mod diagnostics;
mod map;
mod shared;
mod store;
mod validate;

use std::fmt;
use std::hash::Hash;

pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use map::{EntityLabel, ReplacementMap};
pub use shared::SharedReplacementMap;
pub use store::EntitySet;
pub use validate::validate_relation;

/// Initial capacity of newly created entity sets.
pub const DEFAULT_SET_CAPACITY: usize = 3;

/// An opaque identity a relation can track.
///
/// Implemented for every type with identity equality and hashing.
pub trait Entity: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> Entity for T {}
