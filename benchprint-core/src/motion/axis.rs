//! Axis identifiers

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of driven axes
pub const AXIS_COUNT: usize = 4;

/// One independently driven stepper axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
    /// Extruder feed
    E,
}

impl Axis {
    /// All axes in table order
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X, Axis::Y, Axis::Z, Axis::E];

    /// Parse an axis letter (case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            'E' => Some(Axis::E),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
            Axis::E => 'E',
        }
    }

    /// Position of this axis in per-axis tables
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::E => 3,
        }
    }
}
