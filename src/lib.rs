//! GCode Toolpath Model
//!
//! Interprets 3D-printer G-code and reconstructs the toolpath it describes:
//! an ordered list of motion segments grouped into printed layers, each
//! segment classified as travel, extrusion, retraction or restore, with
//! path length, extruded amount and bounding boxes.
//!
//! This library provides:
//! - A line tokenizer that understands common slicer comment markers
//! - A stateful interpreter for G0-G3, G20/G21, G28 and G90-G92
//! - The classify / split-layers / metrics pipeline producing a [`Model`]
//! - Configuration management for the `gcode-model` binary
//!
//! ```rust
//! use gcode_model::{Options, parse_str};
//!
//! let output = parse_str("G1 Z0.2\nG1 X10 E1\nG1 Y10 E2", Options::default()).unwrap();
//! assert_eq!(output.model.layer_count(), 2);
//! assert_eq!(output.model.extrudate, 2.0);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod session;

// Re-exports for clean public API
pub use config::Config;
pub use diagnostics::{Diagnostic, Severity};
pub use error::ParseError;
pub use interpreter::{Interpreter, Options, ShortArcPolicy};
pub use model::{BoundingBox, Coords, Layer, Model, Segment, Style};
pub use parser::{ParsedLine, parse_line};
pub use session::{ParseOutput, Session, parse_file, parse_reader, parse_str};
