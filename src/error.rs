//! Error types for replacement relations and the edit-script driver.
//!
//! This module provides a unified error type [`ReplacementError`] covering
//! frozen-relation mutations, invariant violations, and edit-script parsing
//! and I/O.

use thiserror::Error;

/// Result type alias using [`ReplacementError`].
pub type Result<T> = std::result::Result<T, ReplacementError>;

/// Unified error type for all replacement operations.
#[derive(Error, Debug)]
pub enum ReplacementError {
    // ============ Relation Errors ============
    /// A mutation or composition was attempted on a frozen relation
    #[error("cannot change map after frozen (attempted {operation})")]
    Immutable { operation: &'static str },

    /// The forward and inverse views disagree
    #[error("Replacement invariant violated: {message}")]
    InvariantViolation { message: String },

    // ============ Edit Script Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown command or directive
    #[error("Unknown command '{command}' at line {line}")]
    UnknownCommand { command: String, line: usize },

    // ============ I/O Errors ============
    /// Error reading an edit script
    #[error("Failed to read edit script '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a listing
    #[error("Failed to write output: {source}")]
    OutputError {
        #[from]
        source: std::io::Error,
    },
}

impl ReplacementError {
    /// Create an immutable-mutation error
    pub fn immutable(operation: &'static str) -> Self {
        Self::Immutable { operation }
    }

    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Whether this error signals an attempt to alter a finalized relation.
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Immutable { .. })
    }
}
