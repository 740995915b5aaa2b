//! Parse Session
//!
//! Feeds a program line by line through the tokenizer and interpreter,
//! then runs the model pipeline once the input is exhausted. A session is
//! single-use: a fatal error leaves it to be dropped by the caller.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::interpreter::{Interpreter, Options, SourceLine};
use crate::model::Model;
use crate::parser::{Annotation, parse_line};
use crate::pipeline::build_model;

/// A finished parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutput {
    pub model: Model,
    pub diagnostics: Vec<Diagnostic>,
}

/// One interpretation of one program
#[derive(Debug)]
pub struct Session {
    interpreter: Interpreter,
    line_number: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            interpreter: Interpreter::default(),
            line_number: 0,
        }
    }
}

impl Session {
    pub fn new(options: Options) -> Result<Self> {
        Ok(Self {
            interpreter: Interpreter::new(options)?,
            line_number: 0,
        })
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Consume the next source line.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        let source = SourceLine {
            number: self.line_number,
            text: line.trim_end(),
        };
        let parsed = parse_line(source.text);

        match parsed.annotation {
            Some(Annotation::Region(region)) => self.interpreter.set_region(Some(region)),
            Some(Annotation::LayerCount) => self.interpreter.activate_layer_tracking(),
            Some(Annotation::Layer(index)) => self.interpreter.enter_layer(index),
            None => {}
        }

        if parsed.unterminated_comment {
            self.interpreter.warn(
                &source,
                "Stripping unterminated round-bracket comment".to_string(),
            );
        }

        if let Some(command) = parsed.command {
            self.interpreter.handle(&command, &source)?;
        }

        Ok(())
    }

    /// Build the model from everything fed so far.
    pub fn finish(self) -> ParseOutput {
        let interpreted = self.interpreter.finish();
        let model = build_model(interpreted.segments, interpreted.explicit_layers);
        ParseOutput {
            model,
            diagnostics: interpreted.diagnostics.into_vec(),
        }
    }
}

/// Parse a whole program held in memory.
pub fn parse_str(text: &str, options: Options) -> Result<ParseOutput> {
    let mut session = Session::new(options)?;
    for line in text.lines() {
        session.feed_line(line)?;
    }
    Ok(session.finish())
}

/// Parse a program from any buffered reader, one line at a time.
pub fn parse_reader<R: BufRead>(reader: R, options: Options) -> Result<ParseOutput> {
    let mut session = Session::new(options)?;
    for line in reader.lines() {
        session.feed_line(&line?)?;
    }
    Ok(session.finish())
}

/// Parse a program file.
pub fn parse_file(path: impl AsRef<Path>, options: Options) -> anyhow::Result<ParseOutput> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    log::info!("parsing {}", path.display());
    let output = parse_reader(BufReader::new(file), options)
        .with_context(|| format!("cannot build a model from {}", path.display()))?;
    Ok(output)
}
