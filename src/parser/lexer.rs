//! GCode Lexer
//!
//! Splits a single line into words and comments.
//! Focus: extract tokens quickly, leave interpretation to the AST layer.

/// Token types in GCode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Whitespace-delimited word like "G1", "X10.5" or "M104"
    Word,
    /// Comment (semicolon or parenthetical)
    Comment,
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// False only for a parenthetical comment missing its closing bracket
    pub terminated: bool,
}

impl Token {
    fn word(text: &str) -> Self {
        Self {
            kind: TokenKind::Word,
            text: text.to_string(),
            terminated: true,
        }
    }

    fn comment(text: &str, terminated: bool) -> Self {
        Self {
            kind: TokenKind::Comment,
            text: text.to_string(),
            terminated,
        }
    }
}

/// Tokenize a line of GCode into tokens
///
/// Parenthetical comments may appear anywhere and are closed by the first
/// `)`. A semicolon swallows the rest of the line. Everything else is split
/// on whitespace, so `G1X10` stays a single word.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => continue,

            // Semicolon comment: consume rest of line
            ';' => {
                tokens.push(Token::comment(&line[start_idx..], true));
                break;
            }

            // Parenthetical comment
            '(' => {
                let mut end_idx = line.len();
                let mut found_close = false;

                for (idx, ch) in chars.by_ref() {
                    if ch == ')' {
                        end_idx = idx + 1;
                        found_close = true;
                        break;
                    }
                }

                tokens.push(Token::comment(&line[start_idx..end_idx], found_close));
            }

            // Anything else starts a word running to whitespace or a comment
            _ => {
                let mut end_idx = start_idx + ch.len_utf8();

                while let Some(&(idx, next_ch)) = chars.peek() {
                    if next_ch.is_whitespace() || next_ch == ';' || next_ch == '(' {
                        break;
                    }
                    end_idx = idx + next_ch.len_utf8();
                    chars.next();
                }

                tokens.push(Token::word(&line[start_idx..end_idx]));
            }
        }
    }

    tokens
}
