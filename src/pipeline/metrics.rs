//! Pass 3: distances, extrudate and bounding boxes.

use crate::model::{BoundingBox, Layer, Segment, bbox::extend_opt};

/// Model-wide aggregates produced by [`compute_metrics`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub distance: f64,
    pub extrudate: f64,
    pub bbox: Option<BoundingBox>,
}

/// Walk every layer from its start point and fill in per-segment and
/// per-layer metrics.
///
/// The model box covers every visited point. A layer's box only covers end
/// points of segments that deposited material.
pub fn compute_metrics(segments: &mut [Segment], layers: &mut [Layer]) -> Totals {
    let mut totals = Totals::default();

    for layer in layers.iter_mut() {
        let mut cursor = layer.start;
        layer.distance = 0.0;
        layer.extrudate = 0.0;
        layer.bbox = None;

        extend_opt(&mut totals.bbox, &cursor);

        for &index in &layer.segments {
            let segment = &mut segments[index];
            segment.distance = cursor.distance_to(&segment.coords);
            segment.extrudate = segment.coords.e - cursor.e;

            layer.distance += segment.distance;
            layer.extrudate += segment.extrudate;

            cursor = segment.coords;
            extend_opt(&mut totals.bbox, &cursor);
            if segment.extrudate > 0.0 {
                extend_opt(&mut layer.bbox, &cursor);
            }
        }

        layer.end = cursor;
        totals.distance += layer.distance;
        totals.extrudate += layer.extrudate;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coords, Motion};
    use crate::pipeline::split_layers;

    fn seg(x: f64, y: f64, z: f64, e: f64, layer: usize) -> Segment {
        let coords = Coords {
            x,
            y,
            z,
            f: 0.0,
            e,
        };
        let mut segment = Segment::new(Motion::Linear, None, coords, 0, "");
        segment.layer = layer;
        segment
    }

    #[test]
    fn test_segment_metrics() {
        let mut segments = vec![seg(3.0, 4.0, 0.0, 2.0, 0), seg(3.0, 4.0, 0.0, 1.5, 0)];
        let mut layers = split_layers(&segments);
        let totals = compute_metrics(&mut segments, &mut layers);

        assert_eq!(segments[0].distance, 5.0);
        assert_eq!(segments[0].extrudate, 2.0);
        assert_eq!(segments[1].distance, 0.0);
        assert_eq!(segments[1].extrudate, -0.5);
        assert_eq!(totals.distance, 5.0);
        assert_eq!(totals.extrudate, 1.5);
    }

    #[test]
    fn test_layer_bbox_only_covers_extrusion() {
        let mut segments = vec![
            seg(50.0, 50.0, 0.2, 0.0, 1), // travel far away
            seg(60.0, 50.0, 0.2, 1.0, 1),
            seg(60.0, 55.0, 0.2, 2.0, 1),
            seg(0.0, 0.0, 0.2, 2.0, 1), // travel back
        ];
        let mut layers = split_layers(&segments);
        let totals = compute_metrics(&mut segments, &mut layers);

        let layer_box = layers[0].bbox.expect("layer extruded");
        assert_eq!(layer_box.xmin, 60.0);
        assert_eq!(layer_box.ymax, 55.0);

        let model_box = totals.bbox.expect("model box");
        assert_eq!(model_box.xmin, 0.0);
        assert_eq!(model_box.xmax, 60.0);
    }

    #[test]
    fn test_travel_only_layer_has_no_bbox() {
        let mut segments = vec![seg(1.0, 1.0, 5.0, 0.0, 0)];
        let mut layers = split_layers(&segments);
        compute_metrics(&mut segments, &mut layers);

        assert!(layers[0].bbox.is_none());
    }

    #[test]
    fn test_totals_sum_layers() {
        let mut segments = vec![
            seg(1.0, 0.0, 0.2, 1.0, 1),
            seg(2.0, 0.0, 0.2, 2.0, 1),
            seg(2.0, 0.0, 0.4, 2.0, 2),
            seg(2.0, 3.0, 0.4, 4.0, 2),
        ];
        let mut layers = split_layers(&segments);
        let totals = compute_metrics(&mut segments, &mut layers);

        let distance: f64 = layers.iter().map(|l| l.distance).sum();
        let extrudate: f64 = layers.iter().map(|l| l.extrudate).sum();
        assert_eq!(totals.distance, distance);
        assert_eq!(totals.extrudate, extrudate);
        assert_eq!(totals.extrudate, 4.0);
    }
}
