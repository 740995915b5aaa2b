//! Interpreter
//!
//! Consumes one tokenized command at a time, keeps the motion state and
//! appends the resulting segments. Arcs are flattened here.

pub mod arc;
pub mod instruction;
pub mod state;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::error::{ParseError, Result};
use crate::model::{Motion, Segment};
use crate::parser::{Arguments, Command};

pub use arc::{ArcPlan, DEFAULT_SEGMENT_LENGTH};
pub use instruction::Instruction;
pub use state::{Axis, MotionState, Offset, Position};

/// What to do with an arc too short to yield a single chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShortArcPolicy {
    /// Emit nothing and leave the cursor where it was
    #[default]
    Drop,
    /// Emit one straight segment to the arc's end point
    Line,
}

/// Interpreter tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Target chord length for arc subdivision
    pub arc_segment_length: f64,
    pub short_arcs: ShortArcPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            arc_segment_length: DEFAULT_SEGMENT_LENGTH,
            short_arcs: ShortArcPolicy::Drop,
        }
    }
}

impl Options {
    pub fn new(arc_segment_length: f64, short_arcs: ShortArcPolicy) -> Result<Self> {
        let options = Self {
            arc_segment_length,
            short_arcs,
        };
        options.validate()?;
        Ok(options)
    }

    /// The chord length must be finite and positive, otherwise the step
    /// count of every arc is either zero or unbounded.
    pub fn validate(&self) -> Result<()> {
        if !self.arc_segment_length.is_finite() || self.arc_segment_length <= 0.0 {
            return Err(ParseError::InvalidSegmentLength(self.arc_segment_length));
        }
        Ok(())
    }
}

/// The source line a command came from, for diagnostics and segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLine<'a> {
    /// 1-based
    pub number: usize,
    pub text: &'a str,
}

/// Everything the interpreter produced, handed to the model pipeline
#[derive(Debug)]
pub struct Interpreted {
    pub segments: Vec<Segment>,
    /// Layer indices on the segments came from explicit markers
    pub explicit_layers: bool,
    pub diagnostics: Diagnostics,
}

/// Command dispatcher owning the motion state and the growing segment list
#[derive(Debug)]
pub struct Interpreter {
    options: Options,
    state: MotionState,
    region: Option<String>,
    segments: Vec<Segment>,
    diagnostics: Diagnostics,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::with_checked_options(Options::default())
    }
}

impl Interpreter {
    /// Fails if `options` would make arc subdivision meaningless.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self::with_checked_options(options))
    }

    fn with_checked_options(options: Options) -> Self {
        Self {
            options,
            state: MotionState::new(),
            region: None,
            segments: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Region tag attached to the moves that follow
    pub fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    /// Switch from heuristic to explicit layering
    pub fn activate_layer_tracking(&mut self) {
        self.state.layer_tracking = true;
    }

    /// Explicit layer marker: following moves belong to layer `index`
    pub fn enter_layer(&mut self, index: usize) {
        self.state.layer_tracking = true;
        self.state.current_layer = index;
    }

    /// Record a recoverable problem on `source`
    pub fn warn(&mut self, source: &SourceLine<'_>, message: String) {
        self.diagnostics
            .add_warning(source.number, source.text, message);
    }

    /// Interpret one command.
    ///
    /// Only an inch-units request is fatal; everything else either takes
    /// effect or leaves a warning behind.
    pub fn handle(&mut self, command: &Command, source: &SourceLine<'_>) -> Result<()> {
        match Instruction::decode(command) {
            Instruction::Rapid(args) => self.linear_move(Motion::Rapid, args, source),
            Instruction::Linear(args) => self.linear_move(Motion::Linear, args, source),
            Instruction::Arc { clockwise, args } => self.arc_move(clockwise, args, source),
            Instruction::InchUnits => {
                self.diagnostics.add_error(
                    source.number,
                    source.text,
                    "Unsupported & incompatible: G20: Set Units to Inches".to_string(),
                );
                return Err(ParseError::UnsupportedUnits {
                    line: source.number,
                    text: source.text.to_string(),
                });
            }
            Instruction::MillimeterUnits => {}
            Instruction::Home(_) => self.warn(source, "G28 unimplemented".to_string()),
            Instruction::Absolute => self.state.is_relative = false,
            Instruction::Relative => self.state.is_relative = true,
            Instruction::SetPosition(args) => self.set_position(args, source),
            Instruction::Unknown(code) => self.warn(source, format!("Unknown code '{}'", code)),
        }
        Ok(())
    }

    /// Hand the collected segments over to the model pipeline
    pub fn finish(self) -> Interpreted {
        Interpreted {
            segments: self.segments,
            explicit_layers: self.state.layer_tracking,
            diagnostics: self.diagnostics,
        }
    }

    // -- private API --

    /// Clone the working position and apply the command's axis words.
    fn updated_position(
        &mut self,
        args: &Arguments,
        accepts: fn(Axis) -> bool,
        source: &SourceLine<'_>,
    ) -> Position {
        let mut next = self.state.relative;
        for (letter, value) in args.iter() {
            match Axis::from_letter(letter).filter(|&axis| accepts(axis)) {
                Some(axis) => next.apply(axis, value, self.state.is_relative),
                None => self.warn(source, format!("Unknown axis '{}'", letter)),
            }
        }
        next
    }

    fn linear_move(&mut self, motion: Motion, args: &Arguments, source: &SourceLine<'_>) {
        let next = self.updated_position(args, Axis::is_linear, source);
        self.push_segment(motion, &next, source);
        self.state.relative = next;
    }

    fn arc_move(&mut self, clockwise: bool, args: &Arguments, source: &SourceLine<'_>) {
        let motion = if clockwise {
            Motion::ArcClockwise
        } else {
            Motion::ArcCounterClockwise
        };
        let start = self.state.relative;
        let mut next = self.updated_position(args, |_| true, source);
        let plan = ArcPlan::new(&start, &next, clockwise, self.options.arc_segment_length);

        if plan.steps == 0 {
            match self.options.short_arcs {
                ShortArcPolicy::Drop => {
                    log::debug!(
                        "line {}: dropping arc of length {:.4} (no full chord)",
                        source.number,
                        plan.length()
                    );
                }
                ShortArcPolicy::Line => {
                    self.push_segment(motion, &next, source);
                    self.state.relative = next;
                }
            }
            return;
        }

        let end_e = next.e;
        for step in 1..=plan.steps {
            let fraction = step as f64 / plan.steps as f64;
            let (x, y) = plan.point_at(fraction);
            next.x = x;
            next.y = y;
            next.e = start.e + (end_e - start.e) * fraction;
            self.push_segment(motion, &next, source);
            self.state.relative = next;
        }
    }

    fn set_position(&mut self, args: &Arguments, source: &SourceLine<'_>) {
        let all_zero: Arguments;
        let args = if args.is_empty() {
            all_zero = [('X', 0.0), ('Y', 0.0), ('Z', 0.0), ('E', 0.0)]
                .into_iter()
                .collect();
            &all_zero
        } else {
            args
        };

        for (letter, value) in args.iter() {
            let reset = Axis::from_letter(letter)
                .map(|axis| self.state.reset_axis(axis, value))
                .unwrap_or(false);
            if !reset {
                self.warn(source, format!("Unknown axis '{}'", letter));
            }
        }
    }

    fn push_segment(&mut self, motion: Motion, position: &Position, source: &SourceLine<'_>) {
        let mut segment = Segment::new(
            motion,
            self.region.clone(),
            self.state.absolute(position),
            source.number,
            source.text,
        );
        if self.state.layer_tracking {
            segment.layer = self.state.current_layer;
        }
        self.segments.push(segment);
    }
}
