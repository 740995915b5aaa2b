use std::fmt;

use serde::Serialize;

use super::{BoundingBox, Coords};

/// A contiguous run of segments sharing one layer index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    /// Layer index shared by all of its segments
    pub index: usize,
    /// Z of the position the layer starts from
    pub z: f64,
    /// Indices into the model's segment list, in program order
    pub segments: Vec<usize>,
    pub start: Coords,
    pub end: Coords,
    pub distance: f64,
    pub extrudate: f64,
    /// Envelope of the end points of extruding moves only. The start point
    /// is not included, so a layer that never extrudes has `None`.
    pub bbox: Option<BoundingBox>,
}

impl Layer {
    pub fn new(index: usize, start: Coords) -> Self {
        Self {
            index,
            z: start.z,
            segments: Vec::new(),
            start,
            end: start,
            distance: 0.0,
            extrudate: 0.0,
            bbox: None,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Layer: index={}, Z={:.6}, segments={}, distance={:.6}, extrudate={:.6}>",
            self.index,
            self.z,
            self.segments.len(),
            self.distance,
            self.extrudate
        )
    }
}
