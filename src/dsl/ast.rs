//! Abstract Syntax Tree types for edit scripts.

/// A parsed edit script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditScript {
    /// Commands in source order
    pub commands: Vec<CommandDef>,
}

impl EditScript {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A command together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDef {
    pub command: Command,
    /// Source line number for error reporting
    pub line: usize,
}

/// Edit-script commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `replace <old> <new>`
    Replace { old: String, new: String },
    /// `put <old> [<new> ...]`
    Put { old: String, news: Vec<String> },
    /// `remove <entity>`
    Remove { entity: String },
    /// `add <entity>`
    Add { entity: String },
    /// `.commit`: freeze the pending step and compose it into the session
    Commit,
    /// `.print [inverse]`
    Print { inverse: bool },
    /// `.check`: validate the session relation
    Check,
    /// `.reset`: discard the pending step
    Reset,
}
