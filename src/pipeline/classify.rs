//! Pass 1: segment styles and heuristic layering.

use crate::model::{Coords, Segment, Style};

/// Style of a move from `prev` to `next`.
pub fn style_of(prev: &Coords, next: &Coords) -> Style {
    let moved_xy = next.x != prev.x || next.y != prev.y;

    if !moved_xy && next.e != prev.e {
        if next.e < prev.e {
            Style::Retract
        } else {
            Style::Restore
        }
    } else if moved_xy && next.e > prev.e {
        Style::Extrude
    } else {
        Style::Fly
    }
}

/// Assign a style to every segment, and a layer index unless the program
/// marked its layers explicitly.
///
/// A new heuristic layer starts whenever material is pushed at a Z other
/// than the one the current layer started extruding at. The machine is
/// assumed to start at the origin with nothing extruded.
pub fn classify(segments: &mut [Segment], explicit_layers: bool) {
    let mut prev = Coords::default();
    let mut layer = 0;
    let mut layer_z = 0.0;

    for segment in segments.iter_mut() {
        let next = segment.coords;

        if next.e > prev.e && next.z != layer_z {
            layer_z = next.z;
            layer += 1;
        }

        segment.style = style_of(&prev, &next);
        if !explicit_layers {
            segment.layer = layer;
        }

        prev = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Motion;

    fn seg(x: f64, y: f64, z: f64, e: f64) -> Segment {
        let coords = Coords {
            x,
            y,
            z,
            f: 0.0,
            e,
        };
        Segment::new(Motion::Linear, None, coords, 0, "")
    }

    fn styles(segments: &[Segment]) -> Vec<Style> {
        segments.iter().map(|s| s.style).collect()
    }

    #[test]
    fn test_basic_styles() {
        let mut segments = vec![
            seg(0.0, 0.0, 0.2, 0.0),  // fly (Z only)
            seg(10.0, 0.0, 0.2, 1.0), // extrude
            seg(10.0, 0.0, 0.2, 0.2), // retract
            seg(20.0, 0.0, 0.2, 0.2), // fly
            seg(20.0, 0.0, 0.2, 1.0), // restore
        ];
        classify(&mut segments, false);

        assert_eq!(
            styles(&segments),
            vec![
                Style::Fly,
                Style::Extrude,
                Style::Retract,
                Style::Fly,
                Style::Restore
            ]
        );
    }

    #[test]
    fn test_retract_restore_keeps_layer() {
        let mut segments = vec![
            seg(5.0, 5.0, 0.2, 1.0),
            seg(5.0, 5.0, 0.2, 0.0),
            seg(5.0, 5.0, 0.2, 1.0),
            seg(6.0, 5.0, 0.2, 1.5),
        ];
        classify(&mut segments, false);

        assert_eq!(segments[1].style, Style::Retract);
        assert_eq!(segments[2].style, Style::Restore);
        assert!(segments.iter().all(|s| s.layer == 1));
    }

    #[test]
    fn test_heuristic_layers_follow_extruding_z() {
        let mut segments = vec![
            seg(0.0, 0.0, 0.3, 0.0), // travel before any extrusion
            seg(1.0, 0.0, 0.3, 1.0),
            seg(1.0, 0.0, 0.6, 1.0), // Z hop, no extrusion
            seg(2.0, 0.0, 0.6, 2.0),
            seg(3.0, 0.0, 0.6, 3.0),
        ];
        classify(&mut segments, false);

        let layers: Vec<_> = segments.iter().map(|s| s.layer).collect();
        assert_eq!(layers, vec![0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_explicit_layers_untouched() {
        let mut segments = vec![seg(1.0, 0.0, 0.3, 1.0), seg(2.0, 0.0, 0.6, 2.0)];
        segments[0].layer = 7;
        segments[1].layer = 7;
        classify(&mut segments, true);

        assert!(segments.iter().all(|s| s.layer == 7));
        assert!(segments.iter().all(|s| s.style == Style::Extrude));
    }

    #[test]
    fn test_reclassification_is_stable() {
        let mut segments = vec![
            seg(1.0, 1.0, 0.2, 0.5),
            seg(1.0, 1.0, 0.2, 0.0),
            seg(4.0, 2.0, 0.4, 0.4),
            seg(0.0, 0.0, 0.4, 0.4),
        ];
        classify(&mut segments, false);
        let first = segments.clone();

        for s in segments.iter_mut() {
            s.style = Style::Restore;
            s.layer = 99;
        }
        classify(&mut segments, false);

        assert_eq!(segments, first);
    }
}
