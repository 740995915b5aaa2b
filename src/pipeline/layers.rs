//! Pass 2: group consecutive segments into layers.

use crate::model::{Coords, Layer, Segment};

/// Open a new layer every time the layer index changes between neighbours.
///
/// Layers come out in order of first appearance. Each starts where the
/// previous segment ended (the origin for the first) and ends at its own
/// last segment.
pub fn split_layers(segments: &[Segment]) -> Vec<Layer> {
    let mut layers: Vec<Layer> = Vec::new();
    let mut cursor = Coords::default();

    for (i, segment) in segments.iter().enumerate() {
        let opens_layer = layers.last().is_none_or(|l| l.index != segment.layer);
        if opens_layer {
            if let Some(previous) = layers.last_mut() {
                previous.end = cursor;
            }
            layers.push(Layer::new(segment.layer, cursor));
        }

        if let Some(layer) = layers.last_mut() {
            layer.segments.push(i);
        }
        cursor = segment.coords;
    }

    if let Some(last) = layers.last_mut() {
        last.end = cursor;
    }

    layers
}
