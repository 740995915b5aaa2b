//! Toolpath Model
//!
//! The queryable result of a parse: segments in program order, the layers
//! grouping them and the aggregate metrics. Built once by the pipeline,
//! read-only afterwards.

pub mod bbox;
pub mod layer;
pub mod segment;

use std::fmt;

use serde::Serialize;

pub use bbox::BoundingBox;
pub use layer::Layer;
pub use segment::{Motion, Segment, Style};

/// A device-space position: X, Y, Z, feed rate and extruder axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub f: f64,
    pub e: f64,
}

impl Coords {
    /// Straight-line XYZ distance; feed rate and extruder are ignored.
    pub fn distance_to(&self, other: &Coords) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// The reconstructed toolpath
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Model {
    pub segments: Vec<Segment>,
    pub layers: Vec<Layer>,
    pub distance: f64,
    pub extrudate: f64,
    /// Envelope of every visited position; `None` for a program without moves
    pub bbox: Option<BoundingBox>,
}

impl Model {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Position of the last layer in `layers`
    pub fn top_layer(&self) -> Option<usize> {
        self.layers.len().checked_sub(1)
    }

    /// Segments of a layer, resolved from its indices
    pub fn segments_in<'a>(&'a self, layer: &'a Layer) -> impl Iterator<Item = &'a Segment> + 'a {
        layer.segments.iter().map(move |&i| &self.segments[i])
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<GcodeModel: segments={}, layers={}, distance={:.6}, extrudate={:.6}, bbox=",
            self.segments.len(),
            self.layers.len(),
            self.distance,
            self.extrudate
        )?;
        match &self.bbox {
            Some(bbox) => write!(f, "{}>", bbox),
            None => f.write_str("none>"),
        }
    }
}
