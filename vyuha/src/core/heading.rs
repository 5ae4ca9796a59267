//! Headings and rotations on the maze grid.
//!
//! All direction arithmetic goes through the constant tables in this module,
//! so every controller instance shares the same read-only lookup data.

use serde::{Deserialize, Serialize};

/// Cardinal facing direction, ordered clockwise starting from `Up`.
///
/// `Up` is +Y and `Right` is +X, matching the maze file layout where the
/// start cell `(0, 0)` sits in the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Heading {
    /// Toward increasing Y
    #[default]
    Up = 0,
    /// Toward increasing X
    Right = 1,
    /// Toward decreasing Y
    Down = 2,
    /// Toward decreasing X
    Left = 3,
}

/// Unit move vector for each heading, indexed by `Heading as usize`.
const MOVE_VECTORS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Absolute headings seen by the (left, front, right) sensors for each heading.
const SENSOR_HEADINGS: [[Heading; 3]; 4] = [
    [Heading::Left, Heading::Up, Heading::Right],
    [Heading::Up, Heading::Right, Heading::Down],
    [Heading::Right, Heading::Down, Heading::Left],
    [Heading::Down, Heading::Left, Heading::Up],
];

impl Heading {
    /// All headings in clockwise order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Position in the clockwise ordering.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit move vector `(dx, dy)`.
    #[inline]
    pub const fn vector(self) -> (i32, i32) {
        MOVE_VECTORS[self as usize]
    }

    /// The opposite heading.
    #[inline]
    pub const fn reverse(self) -> Heading {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// Heading after applying a rotation.
    #[inline]
    pub const fn rotate(self, rotation: Rotation) -> Heading {
        SENSOR_HEADINGS[self as usize][rotation.sensor_index()]
    }

    /// Absolute headings of the left, front and right sensors.
    #[inline]
    pub const fn sensor_headings(self) -> [Heading; 3] {
        SENSOR_HEADINGS[self as usize]
    }

    /// Single rotation that turns `self` into `target`.
    ///
    /// Returns `None` when `target` is the reverse heading, which needs
    /// two quarter turns.
    pub fn rotation_to(self, target: Heading) -> Option<Rotation> {
        Rotation::ALL
            .into_iter()
            .find(|&rotation| self.rotate(rotation) == target)
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            Heading::Up => '^',
            Heading::Right => '>',
            Heading::Down => 'v',
            Heading::Left => '<',
        }
    }
}

/// In-place rotation applied before a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// -90 degrees
    CounterClockwise,
    /// No rotation
    #[default]
    Straight,
    /// +90 degrees
    Clockwise,
}

impl Rotation {
    /// Rotations in sensor order (left, front, right).
    pub const ALL: [Rotation; 3] = [
        Rotation::CounterClockwise,
        Rotation::Straight,
        Rotation::Clockwise,
    ];

    /// Index of the sensor that looks in the direction this rotation faces.
    #[inline]
    pub const fn sensor_index(self) -> usize {
        match self {
            Rotation::CounterClockwise => 0,
            Rotation::Straight => 1,
            Rotation::Clockwise => 2,
        }
    }

    /// Signed rotation in degrees (clockwise positive).
    #[inline]
    pub const fn degrees(self) -> i32 {
        match self {
            Rotation::CounterClockwise => -90,
            Rotation::Straight => 0,
            Rotation::Clockwise => 90,
        }
    }

    /// Parse a rotation from degrees. Only -90, 0 and 90 are valid.
    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        match degrees {
            -90 => Some(Rotation::CounterClockwise),
            0 => Some(Rotation::Straight),
            90 => Some(Rotation::Clockwise),
            _ => None,
        }
    }
}
