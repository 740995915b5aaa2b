//! Motion state
//!
//! The interpreter's cursor. `relative` is the program's own logical
//! position; the device sees `relative + offset` on X, Y, Z and E. Feed rate
//! is never offset, and the arc centre words I/J only ride along in
//! `relative` so an arc can read them back.

use serde::Serialize;

use crate::model::Coords;

/// Axis letters the interpreter tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
    F,
    E,
    I,
    J,
}

impl Axis {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            'F' => Some(Axis::F),
            'E' => Some(Axis::E),
            'I' => Some(Axis::I),
            'J' => Some(Axis::J),
            _ => None,
        }
    }

    /// Axes a linear move may carry: everything but the arc centre words.
    pub fn is_linear(self) -> bool {
        !matches!(self, Axis::I | Axis::J)
    }
}

/// Logical working position, before offsets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub f: f64,
    pub e: f64,
    pub i: f64,
    pub j: f64,
}

impl Position {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::F => self.f,
            Axis::E => self.e,
            Axis::I => self.i,
            Axis::J => self.j,
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
            Axis::F => &mut self.f,
            Axis::E => &mut self.e,
            Axis::I => &mut self.i,
            Axis::J => &mut self.j,
        }
    }

    /// Move one axis: add `value` in relative mode, replace otherwise.
    pub fn apply(&mut self, axis: Axis, value: f64, relative: bool) {
        let slot = self.slot_mut(axis);
        if relative {
            *slot += value;
        } else {
            *slot = value;
        }
    }
}

/// Corrections accumulated by position resets (G92)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub e: f64,
}

impl Offset {
    fn slot_mut(&mut self, axis: Axis) -> Option<&mut f64> {
        match axis {
            Axis::X => Some(&mut self.x),
            Axis::Y => Some(&mut self.y),
            Axis::Z => Some(&mut self.z),
            Axis::E => Some(&mut self.e),
            Axis::F | Axis::I | Axis::J => None,
        }
    }
}

/// The interpreter's mutable cursor, one per session
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MotionState {
    pub relative: Position,
    pub offset: Offset,
    /// G91 is active
    pub is_relative: bool,
    /// An explicit layer marker has been seen
    pub layer_tracking: bool,
    pub current_layer: usize,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device-space coordinates of a logical position
    pub fn absolute(&self, position: &Position) -> Coords {
        Coords {
            x: self.offset.x + position.x,
            y: self.offset.y + position.y,
            z: self.offset.z + position.z,
            f: position.f,
            e: self.offset.e + position.e,
        }
    }

    /// Where the device currently is
    pub fn device_position(&self) -> Coords {
        self.absolute(&self.relative)
    }

    /// Redefine the logical value of `axis` without moving.
    ///
    /// Returns `false` for axes that cannot be reset (F, I, J).
    pub fn reset_axis(&mut self, axis: Axis, requested: f64) -> bool {
        let current = self.relative.get(axis);
        match self.offset.slot_mut(axis) {
            Some(offset) => {
                *offset += current - requested;
                *self.relative.slot_mut(axis) = requested;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_absolute_and_relative() {
        let mut pos = Position::default();
        pos.apply(Axis::X, 5.0, false);
        pos.apply(Axis::X, 2.0, true);
        pos.apply(Axis::E, 1.5, true);

        assert_eq!(pos.x, 7.0);
        assert_eq!(pos.e, 1.5);
    }

    #[test]
    fn test_reset_preserves_device_position() {
        let mut state = MotionState::new();
        state.relative.x = 10.0;
        state.relative.e = 3.0;
        let before = state.device_position();

        assert!(state.reset_axis(Axis::E, 0.0));
        assert!(state.reset_axis(Axis::X, 2.0));

        assert_eq!(state.relative.e, 0.0);
        assert_eq!(state.offset.e, 3.0);
        assert_eq!(state.offset.x, 8.0);
        assert_eq!(state.device_position(), before);
    }

    #[test]
    fn test_feed_rate_cannot_be_reset() {
        let mut state = MotionState::new();
        state.relative.f = 1200.0;
        assert!(!state.reset_axis(Axis::F, 0.0));
        assert_eq!(state.relative.f, 1200.0);
    }

    #[test]
    fn test_feed_rate_is_never_offset() {
        let mut state = MotionState::new();
        state.offset = Offset {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            e: 4.0,
        };
        state.relative.f = 600.0;
        let coords = state.device_position();
        assert_eq!(coords.f, 600.0);
        assert_eq!(coords.e, 4.0);
    }
}
