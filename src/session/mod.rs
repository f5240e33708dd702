//! Edit sessions driven by scripts.
//!
//! An [`EditSession`] plays the role of a small editing engine: it collects
//! replacements into a pending step, freezes the step on commit, keeps the
//! committed steps as history, and composes them into one session relation.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, info};

use crate::circuit::{ComponentId, ComponentNames};
use crate::dsl::{Command, CommandDef, EditScript};
use crate::error::Result;
use crate::relation::{validate_relation, Diagnostic, RecordingSink, ReplacementMap};

/// State of one editing session.
pub struct EditSession {
    names: ComponentNames,
    pending: ReplacementMap<ComponentId>,
    history: Vec<ReplacementMap<ComponentId>>,
    combined: ReplacementMap<ComponentId>,
    diagnostics: Arc<RecordingSink>,
}

impl EditSession {
    /// Create an empty session.
    pub fn new() -> Self {
        let diagnostics = Arc::new(RecordingSink::new());
        Self {
            names: ComponentNames::new(),
            pending: ReplacementMap::with_sink(diagnostics.clone()),
            history: Vec::new(),
            combined: ReplacementMap::with_sink(diagnostics.clone()),
            diagnostics,
        }
    }

    /// Execute every command of `script`, writing listings to `out`.
    pub fn run<W: Write>(&mut self, script: &EditScript, out: &mut W) -> Result<()> {
        for def in &script.commands {
            self.execute(def, out)?;
        }
        Ok(())
    }

    /// Execute one command.
    pub fn execute<W: Write>(&mut self, def: &CommandDef, out: &mut W) -> Result<()> {
        debug!(line = def.line, command = ?def.command, "session.execute");
        match &def.command {
            Command::Replace { old, new } => {
                let old = self.names.intern(old);
                let new = self.names.intern(new);
                self.pending.replace(old, new)?;
            }
            Command::Put { old, news } => {
                let old = self.names.intern(old);
                let news: Vec<ComponentId> = news.iter().map(|n| self.names.intern(n)).collect();
                self.pending.put(&old, &news)?;
            }
            Command::Remove { entity } => {
                let entity = self.names.intern(entity);
                self.pending.remove(entity)?;
            }
            Command::Add { entity } => {
                let entity = self.names.intern(entity);
                self.pending.add(entity)?;
            }
            Command::Commit => self.commit()?,
            Command::Print { inverse } => self.print(*inverse, out)?,
            Command::Check => validate_relation(&self.combined)?,
            Command::Reset => self.pending.reset()?,
        }
        Ok(())
    }

    /// Freeze the pending step and compose it into the session relation.
    ///
    /// Committing an empty step does nothing. The first step becomes the
    /// session relation as is; later steps are appended to it.
    pub fn commit(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let fresh = ReplacementMap::with_sink(self.diagnostics.clone());
        let mut step = std::mem::replace(&mut self.pending, fresh);
        step.freeze();

        if self.combined.is_empty() {
            self.combined = step.unfrozen_copy();
        } else {
            let names = self.names.clone();
            self.combined.set_label(Arc::new(move |id: &ComponentId| names.name(*id)));
            self.combined.append(&step)?;
        }
        self.history.push(step);
        info!(
            step = self.history.len(),
            diagnostics = self.diagnostics.len(),
            "session.commit"
        );
        Ok(())
    }

    /// Write the session relation, or its inverse, using component names.
    pub fn print<W: Write>(&self, inverse: bool, out: &mut W) -> Result<()> {
        let label = |id: &ComponentId| self.names.name(*id);
        if inverse {
            self.combined.inverse_map().print_labeled(out, label)?;
        } else {
            self.combined.print_labeled(out, label)?;
        }
        Ok(())
    }

    /// Composition of every committed step.
    pub fn combined(&self) -> &ReplacementMap<ComponentId> {
        &self.combined
    }

    /// The step being collected.
    pub fn pending(&self) -> &ReplacementMap<ComponentId> {
        &self.pending
    }

    /// Committed steps, oldest first. Every step is frozen.
    pub fn history(&self) -> &[ReplacementMap<ComponentId>] {
        &self.history
    }

    pub fn names(&self) -> &ComponentNames {
        &self.names
    }

    /// Diagnostics reported while composing steps.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.diagnostics()
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
