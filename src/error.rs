//! Fatal parse errors.

use thiserror::Error;

/// Conditions that abort a whole parse session
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Line {line}: Unsupported & incompatible: G20: Set Units to Inches (Text:'{text}')")]
    UnsupportedUnits { line: usize, text: String },

    #[error("arc segment length must be a positive number, got {0}")]
    InvalidSegmentLength(f64),

    #[error("failed to read G-code input")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Source line of the failure, when it came from the program itself
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnsupportedUnits { line, .. } => Some(*line),
            ParseError::InvalidSegmentLength(_) | ParseError::Io(_) => None,
        }
    }
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
