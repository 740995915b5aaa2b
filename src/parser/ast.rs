//! Abstract Syntax Tree for GCode
//!
//! Minimal types handed from the tokenizer to the interpreter.
//! No motion semantics here - pure data representation.

use std::fmt;

use crate::parser::annotation::{self, Annotation};
use crate::parser::lexer::{Token, TokenKind};

/// Value used for an argument letter without a parseable number, e.g. `G28 X`.
pub const DEFAULT_ARGUMENT_VALUE: f64 = 1.0;

/// A parsed line of GCode
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedLine {
    /// The command on this line, if any
    pub command: Option<Command>,
    /// Slicer marker found in the semicolon comment
    pub annotation: Option<Annotation>,
    /// A `(` comment ran to the end of the line without closing
    pub unterminated_comment: bool,
}

impl ParsedLine {
    pub fn is_empty(&self) -> bool {
        self.command.is_none() && self.annotation.is_none()
    }
}

/// A GCode command like "G1 X10 Y20"
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Command code, upper-cased (e.g., "G1", "M104")
    pub code: String,
    /// Letter/value arguments in source order
    pub args: Arguments,
}

impl Command {
    pub fn new(code: impl Into<String>, args: Arguments) -> Self {
        Self {
            code: code.into(),
            args,
        }
    }
}

/// Letter-keyed numeric arguments of a command.
///
/// Behaves like a small map: a letter given twice keeps its last value,
/// but first-seen order is preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments(Vec<(char, f64)>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, letter: char, value: f64) {
        match self.0.iter_mut().find(|(l, _)| *l == letter) {
            Some(entry) => entry.1 = value,
            None => self.0.push((letter, value)),
        }
    }

    pub fn get(&self, letter: char) -> Option<f64> {
        self.0.iter().find(|(l, _)| *l == letter).map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<(char, f64)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        let mut args = Arguments::new();
        for (letter, value) in iter {
            args.insert(letter, value);
        }
        args
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", letter, value)?;
        }
        Ok(())
    }
}

/// Convert tokens into a parsed line
pub fn tokens_to_parsed_line(tokens: Vec<Token>) -> ParsedLine {
    let mut line = ParsedLine::default();
    let mut words = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Word => words.push(token.text),
            TokenKind::Comment if !token.terminated => line.unterminated_comment = true,
            TokenKind::Comment if token.text.starts_with(';') => {
                line.annotation = annotation::detect(&token.text);
            }
            TokenKind::Comment => {}
        }
    }

    let mut words = words.into_iter();
    if let Some(code) = words.next() {
        let args = words.filter_map(|w| parse_argument(&w)).collect();
        line.command = Some(Command::new(code.to_ascii_uppercase(), args));
    }

    line
}

/// Parse an argument word like "X10.5" into a letter and value
fn parse_argument(text: &str) -> Option<(char, f64)> {
    let mut chars = text.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let value = chars
        .as_str()
        .parse::<f64>()
        .unwrap_or(DEFAULT_ARGUMENT_VALUE);
    Some((letter, value))
}
