use std::fmt;

use serde::Serialize;

use super::Coords;

/// Axis-aligned extent over X, Y and Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
}

impl BoundingBox {
    /// A degenerate box around a single point.
    pub fn from_coords(coords: &Coords) -> Self {
        Self {
            xmin: coords.x,
            xmax: coords.x,
            ymin: coords.y,
            ymax: coords.y,
            zmin: coords.z,
            zmax: coords.z,
        }
    }

    pub fn extend(&mut self, coords: &Coords) {
        self.xmin = self.xmin.min(coords.x);
        self.xmax = self.xmax.max(coords.x);
        self.ymin = self.ymin.min(coords.y);
        self.ymax = self.ymax.max(coords.y);
        self.zmin = self.zmin.min(coords.z);
        self.zmax = self.zmax.max(coords.z);
    }

    pub fn merge(&mut self, other: &BoundingBox) {
        self.xmin = self.xmin.min(other.xmin);
        self.xmax = self.xmax.max(other.xmax);
        self.ymin = self.ymin.min(other.ymin);
        self.ymax = self.ymax.max(other.ymax);
        self.zmin = self.zmin.min(other.zmin);
        self.zmax = self.zmax.max(other.zmax);
    }

    pub fn dx(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn dy(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn dz(&self) -> f64 {
        self.zmax - self.zmin
    }

    pub fn cx(&self) -> f64 {
        (self.xmax + self.xmin) / 2.0
    }

    pub fn cy(&self) -> f64 {
        (self.ymax + self.ymin) / 2.0
    }

    pub fn cz(&self) -> f64 {
        (self.zmax + self.zmin) / 2.0
    }
}

/// Grow an optional box, creating it from the first point seen.
pub fn extend_opt(bbox: &mut Option<BoundingBox>, coords: &Coords) {
    match bbox {
        Some(b) => b.extend(coords),
        None => *bbox = Some(BoundingBox::from_coords(coords)),
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}..{:.3}] x [{:.3}..{:.3}] x [{:.3}..{:.3}]",
            self.xmin, self.xmax, self.ymin, self.ymax, self.zmin, self.zmax
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, z: f64) -> Coords {
        Coords {
            x,
            y,
            z,
            ..Coords::default()
        }
    }

    #[test]
    fn test_extend_is_monotonic() {
        let mut bbox = BoundingBox::from_coords(&at(1.0, 1.0, 1.0));
        bbox.extend(&at(-2.0, 4.0, 0.5));
        bbox.extend(&at(0.0, 0.0, 0.7));

        assert_eq!(bbox.xmin, -2.0);
        assert_eq!(bbox.xmax, 1.0);
        assert_eq!(bbox.ymin, 0.0);
        assert_eq!(bbox.ymax, 4.0);
        assert_eq!(bbox.zmin, 0.5);
        assert_eq!(bbox.zmax, 1.0);
        assert_eq!(bbox.dx(), 3.0);
        assert_eq!(bbox.cy(), 2.0);
    }

    #[test]
    fn test_extend_opt_creates_box() {
        let mut bbox = None;
        extend_opt(&mut bbox, &at(3.0, 2.0, 1.0));
        extend_opt(&mut bbox, &at(5.0, 2.0, 1.0));

        let bbox = bbox.expect("box created");
        assert_eq!(bbox.dx(), 2.0);
        assert_eq!(bbox.dz(), 0.0);
        assert_eq!(bbox.cx(), 4.0);
    }

    #[test]
    fn test_merge() {
        let mut a = BoundingBox::from_coords(&at(0.0, 0.0, 0.0));
        let b = BoundingBox::from_coords(&at(10.0, -1.0, 2.0));
        a.merge(&b);
        assert_eq!(a.xmax, 10.0);
        assert_eq!(a.ymin, -1.0);
        assert_eq!(a.cz(), 1.0);
    }
}
