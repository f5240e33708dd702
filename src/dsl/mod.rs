//! Edit-script language for driving replacement relations.
//!
//! Scripts are line-oriented and human-editable. Each line records one
//! replacement in the pending edit step, or is a directive acting on the
//! session.
//!
//! # Grammar Overview
//!
//! ```text
//! script    = { line }
//! line      = comment | directive | command | empty
//! comment   = ('#' | ';') { any_char }
//! command   = "replace" name name
//!           | "put" name { name }
//!           | "remove" name
//!           | "add" name
//! directive = ".commit" | ".check" | ".reset" | ".print" ["inverse"]
//! name      = (letter | digit | '_' | '-' | ':' | '@')+
//! ```
//!
//! # Example
//!
//! ```text
//! # Swap a gate, then split its replacement
//! replace AND1 NAND1
//! add PIN4
//! .commit
//!
//! put NAND1 NAND2 NOT1
//! .commit
//! .print
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse an edit script from a string.
pub fn parse(input: &str) -> Result<EditScript> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse an edit script file.
pub fn parse_file(path: &std::path::Path) -> Result<EditScript> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::ReplacementError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
