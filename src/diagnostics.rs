//! Diagnostics
//!
//! Recoverable issues found while interpreting a program. Every entry is
//! also forwarded to the `log` facade as it is recorded.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message tied to a source line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub text: String,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: {} (Text:'{}')",
            self.line, self.message, self.text
        )
    }
}

/// Diagnostics collected over one session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, line: usize, text: &str, message: String) {
        let diagnostic = Diagnostic {
            line,
            text: text.to_string(),
            message,
            severity: Severity::Warning,
        };
        log::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn add_error(&mut self, line: usize, text: &str, message: String) {
        let diagnostic = Diagnostic {
            line,
            text: text.to_string(),
            message,
            severity: Severity::Error,
        };
        log::error!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
