//! Maze cell coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// Maze cell coordinates (integer indices)
///
/// Valid cells lie in `[0, dim) × [0, dim)`. Signed components let callers
/// step past the border and test the result with [`Cell::is_within`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Adjacent cell in the given heading
    #[inline]
    pub fn neighbor(self, heading: Heading) -> Cell {
        self.step(heading, 1)
    }

    /// Cell reached after moving `distance` cells along `heading`.
    /// Negative distances move backward.
    #[inline]
    pub fn step(self, heading: Heading, distance: i32) -> Cell {
        let (dx, dy) = heading.vector();
        Cell::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Is this cell inside a `dim × dim` maze?
    #[inline]
    pub fn is_within(&self, dim: usize) -> bool {
        let dim = dim as i64;
        (0..dim).contains(&(self.x as i64)) && (0..dim).contains(&(self.y as i64))
    }

    /// The four centre cells of an even-sized maze.
    pub fn centre_cells(dim: usize) -> Vec<Cell> {
        let high = (dim / 2) as i32;
        let low = high - 1;
        vec![
            Cell::new(low, low),
            Cell::new(low, high),
            Cell::new(high, low),
            Cell::new(high, high),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_neighbor() {
        let cell = Cell::new(2, 2);
        assert_eq!(cell.neighbor(Heading::Up), Cell::new(2, 3));
        assert_eq!(cell.neighbor(Heading::Left), Cell::new(1, 2));
        assert_eq!(cell.step(Heading::Right, 3), Cell::new(5, 2));
        assert_eq!(cell.step(Heading::Up, -2), Cell::new(2, 0));
    }

    #[test]
    fn test_is_within() {
        assert!(Cell::new(0, 0).is_within(4));
        assert!(Cell::new(3, 3).is_within(4));
        assert!(!Cell::new(4, 0).is_within(4));
        assert!(!Cell::new(0, -1).is_within(4));
    }

    #[test]
    fn test_centre_cells() {
        let centre = Cell::centre_cells(12);
        assert_eq!(centre.len(), 4);
        assert!(centre.contains(&Cell::new(5, 5)));
        assert!(centre.contains(&Cell::new(6, 6)));
        assert!(centre.contains(&Cell::new(5, 6)));
        assert!(centre.contains(&Cell::new(6, 5)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Cell::from((1, 2)), Cell::new(1, 2));
        assert_eq!(Cell::new(0, 0).manhattan_distance(&Cell::new(2, 3)), 5);
    }
}
