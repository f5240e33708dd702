//! # Replacement Core
//!
//! Bookkeeping for structural edits of a circuit.
//!
//! This library provides:
//! - A bidirectional, many-to-many replacement relation between the
//!   components present before an edit and those present after it
//! - Composition of the relations of consecutive edits into one
//! - A freeze gate making a finished edit read-only
//! - A small edit-script language and session for driving relations
//!
//! ## Architecture
//!
//! - [`relation`] - The replacement relation, composition and diagnostics
//! - [`circuit`] - Component identity handles and name interning
//! - [`dsl`] - Parser for the edit-script language
//! - [`session`] - Edit sessions built from scripts
//!
//! ## Usage
//!
//! ```
//! use replacement_core::{ComponentId, ReplacementMap};
//!
//! let mut first = ReplacementMap::with_replacement(ComponentId(1), ComponentId(2));
//! let second = ReplacementMap::with_replacement(ComponentId(2), ComponentId(3));
//! first.append(&second)?;
//!
//! let targets = first.get(&ComponentId(1)).unwrap();
//! assert!(targets.contains(&ComponentId(3)));
//! assert!(!targets.contains(&ComponentId(2)));
//! # Ok::<(), replacement_core::ReplacementError>(())
//! ```
//!
//! ### CLI
//!
//! ```bash
//! replmap edits.rpl --inverse
//! ```

pub mod circuit;
pub mod dsl;
pub mod error;
pub mod relation;
pub mod session;

// Re-export main types for convenience
pub use circuit::ComponentId;
pub use error::{ReplacementError, Result};
pub use relation::{ReplacementMap, SharedReplacementMap};
pub use session::EditSession;
