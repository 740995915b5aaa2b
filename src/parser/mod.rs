//! GCode Parser
//!
//! Tokenizer layer feeding the interpreter: comment stripping, slicer
//! marker detection and argument splitting.

pub mod annotation;
pub mod ast;
pub mod lexer;

pub use annotation::Annotation;
pub use ast::{Arguments, Command, ParsedLine};
pub use lexer::{Token, TokenKind, tokenize_line};

/// Parse a single line of GCode into structured data
///
/// This is the main entry point for parsing. It tokenizes the line
/// and constructs a simple AST representation.
pub fn parse_line(line: &str) -> ParsedLine {
    let tokens = lexer::tokenize_line(line);
    ast::tokens_to_parsed_line(tokens)
}
