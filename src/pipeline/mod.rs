//! Model Pipeline
//!
//! Post-processing over the finished segment list, in a fixed order:
//! classify, split into layers, compute metrics. Each pass reads what the
//! previous one wrote, so they must not be reordered.

pub mod classify;
pub mod layers;
pub mod metrics;

pub use classify::{classify, style_of};
pub use layers::split_layers;
pub use metrics::{Totals, compute_metrics};

use crate::model::{Model, Segment};

/// Run all three passes and assemble the model.
pub fn build_model(mut segments: Vec<Segment>, explicit_layers: bool) -> Model {
    classify(&mut segments, explicit_layers);
    let mut layers = split_layers(&segments);
    let totals = compute_metrics(&mut segments, &mut layers);

    log::debug!(
        "built model: {} segments in {} layers",
        segments.len(),
        layers.len()
    );

    Model {
        segments,
        layers,
        distance: totals.distance,
        extrudate: totals.extrudate,
        bbox: totals.bbox,
    }
}
