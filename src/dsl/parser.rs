//! Parser for the edit-script language.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{ReplacementError, Result};

/// Parser for edit scripts.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire script.
    pub fn parse(&mut self) -> Result<EditScript> {
        let mut script = EditScript::new();

        loop {
            match self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => {
                    let def = self.parse_directive()?;
                    script.commands.push(def);
                }
                TokenKind::Identifier => {
                    let def = self.parse_command()?;
                    script.commands.push(def);
                }
            }

            self.end_of_line()?;
        }

        Ok(script)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect_name(&mut self, what: &str) -> Result<String> {
        if self.current.kind == TokenKind::Identifier {
            let text = self.current.text.clone();
            self.advance()?;
            Ok(text)
        } else {
            Err(ReplacementError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.kind),
            ))
        }
    }

    /// Collect the remaining names on the current line.
    fn rest_of_line(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        while self.current.kind == TokenKind::Identifier {
            names.push(self.current.text.clone());
            self.advance()?;
        }
        Ok(names)
    }

    fn end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(ReplacementError::parse(
                self.current.line,
                format!("unexpected token: {:?}", self.current.text),
            )),
        }
    }

    fn parse_command(&mut self) -> Result<CommandDef> {
        let keyword = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let command = match keyword.to_lowercase().as_str() {
            "replace" => {
                let old = self.expect_name("component to replace")?;
                let new = self.expect_name("replacement component")?;
                Command::Replace { old, new }
            }
            "put" => {
                let old = self.expect_name("component to replace")?;
                let news = self.rest_of_line()?;
                Command::Put { old, news }
            }
            "remove" => Command::Remove {
                entity: self.expect_name("component to remove")?,
            },
            "add" => Command::Add {
                entity: self.expect_name("component to add")?,
            },
            _ => {
                return Err(ReplacementError::UnknownCommand {
                    command: keyword,
                    line,
                })
            }
        };

        Ok(CommandDef { command, line })
    }

    fn parse_directive(&mut self) -> Result<CommandDef> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let command = match directive.to_lowercase().as_str() {
            ".commit" => Command::Commit,
            ".check" => Command::Check,
            ".reset" => Command::Reset,
            ".print" => {
                let args = self.rest_of_line()?;
                match args.as_slice() {
                    [] => Command::Print { inverse: false },
                    [arg] if arg.eq_ignore_ascii_case("inverse") => {
                        Command::Print { inverse: true }
                    }
                    _ => {
                        return Err(ReplacementError::parse(
                            line,
                            format!(".print takes at most 'inverse', got {:?}", args),
                        ))
                    }
                }
            }
            _ => {
                return Err(ReplacementError::UnknownCommand {
                    command: directive,
                    line,
                })
            }
        };

        Ok(CommandDef { command, line })
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;

    #[test]
    fn test_parse_replace() {
        let script = parse("replace AND1 AND2").unwrap();
        assert_eq!(script.commands.len(), 1);
        assert_eq!(
            script.commands[0].command,
            Command::Replace {
                old: "AND1".to_string(),
                new: "AND2".to_string(),
            }
        );
        assert_eq!(script.commands[0].line, 1);
    }

    #[test]
    fn test_parse_put_without_targets() {
        let script = parse("put W1\nput W2 W3 W4").unwrap();
        assert_eq!(
            script.commands[0].command,
            Command::Put {
                old: "W1".to_string(),
                news: vec![],
            }
        );
        assert_eq!(
            script.commands[1].command,
            Command::Put {
                old: "W2".to_string(),
                news: vec!["W3".to_string(), "W4".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_directives() {
        let script = parse(".commit\n.print inverse\n.print\n.check\n.reset\n").unwrap();
        let commands: Vec<_> = script.commands.into_iter().map(|d| d.command).collect();
        assert_eq!(
            commands,
            vec![
                Command::Commit,
                Command::Print { inverse: true },
                Command::Print { inverse: false },
                Command::Check,
                Command::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_with_comments() {
        let input = "# step one\nadd PIN1 ; new pin\n\nremove NOT2\n";
        let script = parse(input).unwrap();
        assert_eq!(script.commands.len(), 2);
        assert_eq!(script.commands[1].line, 4);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("add X\nrotate X").unwrap_err();
        assert!(matches!(
            err,
            ReplacementError::UnknownCommand { line: 2, .. }
        ));
        assert!(parse(".undo").is_err());
    }

    #[test]
    fn test_trailing_arguments_rejected() {
        let err = parse("remove A B").unwrap_err();
        assert!(matches!(err, ReplacementError::ParseError { line: 1, .. }));
        assert!(parse("replace A").is_err());
    }
}
