//! Diagnostic reporting for replacement relations.
//!
//! Consistency problems found while composing relations are not errors: the
//! composition repairs them and carries on. They are reported to a
//! [`DiagnosticSink`] configured on each relation instead.

use std::fmt;

use parking_lot::Mutex;
use tracing::warn;

/// A non-fatal problem detected inside a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A second-step product claimed replacement sources that the first step
    /// never produced. Its sources were dropped.
    UnrepresentedReplacement {
        /// Debug rendering of the offending entity
        entity: String,
        /// Number of sources discarded
        sources: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrepresentedReplacement { entity, .. } => {
                write!(
                    f,
                    "internal error: component replaced but not represented ({})",
                    entity
                )
            }
        }
    }
}

/// Receiver of relation diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Report one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnrepresentedReplacement { entity, sources } => {
                warn!(
                    entity = %entity,
                    sources = *sources,
                    "relation.compose.unrepresented"
                );
            }
        }
    }
}

/// Collects diagnostics in memory, e.g. for an editing session.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    /// Remove and return everything reported so far.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.records.lock().push(diagnostic.clone());
    }
}
