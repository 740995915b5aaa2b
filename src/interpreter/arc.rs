//! Arc subdivision
//!
//! G2/G3 moves are flattened into chords of roughly equal length. The step
//! count is fixed by the arc length, not by a chord-error tolerance.

use std::f64::consts::TAU;

use super::state::Position;

/// Default chord length used to subdivide arcs
pub const DEFAULT_SEGMENT_LENGTH: f64 = 0.5;

/// Geometry of one arc move in the XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPlan {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep: negative for clockwise, positive for counter-clockwise
    pub sweep: f64,
    pub steps: usize,
}

impl ArcPlan {
    /// Plan an arc from `start` to `end`, centred at `start + (end.i, end.j)`.
    pub fn new(start: &Position, end: &Position, clockwise: bool, segment_length: f64) -> Self {
        let center_x = start.x + end.i;
        let center_y = start.y + end.j;
        let mut start_angle = (-end.j).atan2(-end.i);
        let end_angle = (end.y - center_y).atan2(end.x - center_x);
        let radius = end.i.hypot(end.j);

        let sweep = if clockwise {
            if start_angle < end_angle {
                start_angle += TAU;
            }
            -(end_angle - start_angle).abs()
        } else {
            if start_angle > end_angle {
                start_angle -= TAU;
            }
            (end_angle - start_angle).abs()
        };

        // Saturating cast: NaN and negatives collapse to zero steps.
        let steps = (sweep.abs() * radius / segment_length) as usize;

        Self {
            center_x,
            center_y,
            radius,
            start_angle,
            sweep,
            steps,
        }
    }

    pub fn length(&self) -> f64 {
        self.sweep.abs() * self.radius
    }

    pub fn angle_at(&self, fraction: f64) -> f64 {
        self.start_angle + self.sweep * fraction
    }

    /// XY point at `fraction` of the sweep
    pub fn point_at(&self, fraction: f64) -> (f64, f64) {
        let angle = self.angle_at(fraction);
        (
            self.center_x + angle.cos() * self.radius,
            self.center_y + angle.sin() * self.radius,
        )
    }
}
