use std::fmt;

use serde::Serialize;

use super::Coords;

/// The command family that produced a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Motion {
    /// G0
    Rapid,
    /// G1
    Linear,
    /// G2
    ArcClockwise,
    /// G3
    ArcCounterClockwise,
}

impl Motion {
    pub fn code(self) -> &'static str {
        match self {
            Motion::Rapid => "G0",
            Motion::Linear => "G1",
            Motion::ArcClockwise => "G2",
            Motion::ArcCounterClockwise => "G3",
        }
    }
}

/// What a segment does with the material, decided by the classification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Travel without extrusion
    #[default]
    Fly,
    /// Horizontal movement while pushing filament
    Extrude,
    /// Filament pulled back without horizontal movement
    Retract,
    /// Filament pushed forward again without horizontal movement
    Restore,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Fly => "fly",
            Style::Extrude => "extrude",
            Style::Retract => "retract",
            Style::Restore => "restore",
        };
        f.write_str(name)
    }
}

/// One atomic move between two device-space positions.
///
/// `coords` is the end point; the start point is the previous segment's end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub motion: Motion,
    /// Region tag from the slicer comments active when the move was read
    pub region: Option<String>,
    /// End point with position-reset offsets already applied
    pub coords: Coords,
    /// 1-based source line
    pub line: usize,
    /// Raw source text of that line
    pub text: String,
    pub style: Style,
    pub layer: usize,
    pub distance: f64,
    pub extrudate: f64,
}

impl Segment {
    pub fn new(
        motion: Motion,
        region: Option<String>,
        coords: Coords,
        line: usize,
        text: impl Into<String>,
    ) -> Self {
        Self {
            motion,
            region,
            coords,
            line,
            text: text.into(),
            style: Style::default(),
            layer: 0,
            distance: 0.0,
            extrudate: 0.0,
        }
    }

    /// `"G1"`, or `"G1:infill"` when a region tag is attached.
    pub fn type_label(&self) -> String {
        match &self.region {
            Some(region) => format!("{}:{}", self.motion.code(), region),
            None => self.motion.code().to_string(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Segment: type={}, line={}, style={}, layer={}, distance={:.6}, extrudate={:.6}>",
            self.type_label(),
            self.line,
            self.style,
            self.layer,
            self.distance,
            self.extrudate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_label() {
        let plain = Segment::new(Motion::Linear, None, Coords::default(), 1, "G1 X1");
        assert_eq!(plain.type_label(), "G1");

        let tagged = Segment::new(
            Motion::ArcClockwise,
            Some("infill".to_string()),
            Coords::default(),
            2,
            "G2 X1 I1",
        );
        assert_eq!(tagged.type_label(), "G2:infill");
    }

    #[test]
    fn test_style_serializes_lowercase() {
        let json = serde_json::to_string(&Style::Retract).expect("serialize");
        assert_eq!(json, "\"retract\"");
    }
}
