//! Line protocol for the interactive session.
//!
//! One command per line. Blank lines and `#` comments parse to `None`.
//! Errors carry the byte offset of the offending token.

use crate::domain::error::ParseError;
use crate::domain::form::Field;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { field: Field, value: String },
    Submit,
    Remove { row: usize },
    Show,
    Draft,
    Reset,
    Export,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  set <field> <value>   edit the draft (ticker, units-bought, buy-price, units-sold, sell-price)
  submit | +            add the draft to the portfolio
  remove <n> | - <n>    remove the record shown at row n
  show                  show the overview and record list
  draft                 show the draft and its capital gain preview
  reset                 clear the draft
  export                print stored records as CSV
  help                  show this help
  quit | exit           end the session";

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Next whitespace-delimited token and its start offset.
    fn next_word(&mut self) -> Option<(usize, &'a str)> {
        self.skip_whitespace();
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let start = self.pos;
        self.pos += len;
        Some((start, &rest[..len]))
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.next_word() {
            None => Ok(()),
            Some((position, word)) => Err(ParseError {
                message: format!("unexpected '{}'", word),
                position,
            }),
        }
    }

    fn parse_row(&mut self) -> Result<usize, ParseError> {
        match self.next_word() {
            Some((position, word)) => row_number(word, position),
            None => Err(ParseError {
                message: "expected row number, found end of input".to_string(),
                position: self.pos,
            }),
        }
    }

    fn parse_set(&mut self) -> Result<Command, ParseError> {
        let (position, name) = self.next_word().ok_or_else(|| ParseError {
            message: "expected field name, found end of input".to_string(),
            position: self.pos,
        })?;
        let field = Field::from_name(name).ok_or_else(|| ParseError {
            message: format!("unknown field '{}'", name),
            position,
        })?;
        self.skip_whitespace();
        let value = self.remaining().trim_end().to_string();
        self.pos = self.input.len();
        Ok(Command::Set { field, value })
    }

    fn parse_command(&mut self) -> Result<Option<Command>, ParseError> {
        let Some((position, word)) = self.next_word() else {
            return Ok(None);
        };
        if word.starts_with('#') {
            return Ok(None);
        }

        let command = match word.to_lowercase().as_str() {
            "set" => return self.parse_set().map(Some),
            "submit" | "+" => Command::Submit,
            "remove" | "-" => Command::Remove {
                row: self.parse_row()?,
            },
            "show" => Command::Show,
            "draft" => Command::Draft,
            "reset" => Command::Reset,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            w if w.starts_with('-') => Command::Remove {
                row: row_number(&word[1..], position + 1)?,
            },
            _ => {
                return Err(ParseError {
                    message: format!("unknown command '{}'", word),
                    position,
                });
            }
        };
        self.expect_end()?;
        Ok(Some(command))
    }
}

fn row_number(word: &str, position: usize) -> Result<usize, ParseError> {
    word.parse::<usize>().map_err(|_| ParseError {
        message: format!("expected row number, found '{}'", word),
        position,
    })
}

/// Parse one input line.
pub fn parse(input: &str) -> Result<Option<Command>, ParseError> {
    Parser::new(input).parse_command()
}
