//! Observed wall storage.
//!
//! Walls live on a doubled-resolution grid: the wall on side `heading` of
//! cell `(x, y)` has coordinate `(2x + dx, 2y + dy)`. Both cells sharing a wall
//! address the same slot, so one observation updates both sides at once.
//!
//! ```text
//!   wall coords (dim = 2)        slot layout (side = 3)
//!
//!   y=2   .  w  .                 [x=0: (0,0) (0,1) (0,2)]
//!   y=1   w  .  w                 [x=1: (1,0) (1,1) (1,2)]
//!   y=0   .  w  .                 [x=2: (2,0) (2,1) (2,2)]
//!        x=0 1  2
//! ```
//!
//! Coordinates outside `[0, 2*(dim-1)]` are the maze border and always
//! count as walls.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Heading, SensorReading};

/// Knowledge about a single wall slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum WallState {
    /// Never observed
    #[default]
    Unknown = 0,
    /// Observed as passable
    Open = 1,
    /// Observed as blocked (or maze border)
    Wall = 2,
}

impl WallState {
    /// Has this slot been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != WallState::Unknown
    }
}

/// Bounded record of observed walls.
///
/// Observations accumulate for the life of a trial. The first observation of
/// a slot is authoritative: later readings of the same slot are ignored, even
/// if they disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallMap {
    /// Maze dimension in cells
    dim: usize,
    /// Doubled-grid side length (`2 * dim - 1`)
    side: usize,
    /// Slot states, indexed `wx * side + wy`
    slots: Vec<WallState>,
    /// Number of slots that have been observed
    observed: usize,
}

impl WallMap {
    /// Create an empty map for a `dim × dim` maze.
    pub fn new(dim: usize) -> Self {
        let side = (2 * dim).saturating_sub(1);
        Self {
            dim,
            side,
            slots: vec![WallState::Unknown; side * side],
            observed: 0,
        }
    }

    /// Maze dimension in cells
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Is the cell inside the maze?
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.dim)
    }

    /// Number of wall slots observed so far
    #[inline]
    pub fn observed_walls(&self) -> usize {
        self.observed
    }

    /// Slot index of the wall on side `heading` of `cell`, or `None` for border walls.
    fn slot(&self, cell: Cell, heading: Heading) -> Option<usize> {
        let (dx, dy) = heading.vector();
        let wx = 2 * i64::from(cell.x) + i64::from(dx);
        let wy = 2 * i64::from(cell.y) + i64::from(dy);
        let side = self.side as i64;
        if (0..side).contains(&wx) && (0..side).contains(&wy) {
            Some((wx * side + wy) as usize)
        } else {
            None
        }
    }

    /// Record an observation of the wall on side `heading` of `cell`.
    ///
    /// Returns `true` only when the slot was previously unknown. Border walls
    /// are implicit and never recorded.
    pub fn set_wall(&mut self, cell: Cell, heading: Heading, is_wall: bool) -> bool {
        let Some(index) = self.slot(cell, heading) else {
            return false;
        };
        if self.slots[index].is_known() {
            return false;
        }

        self.slots[index] = if is_wall {
            WallState::Wall
        } else {
            WallState::Open
        };
        self.observed += 1;
        true
    }

    /// Current knowledge about the wall on side `heading` of `cell`.
    #[inline]
    pub fn wall_state(&self, cell: Cell, heading: Heading) -> WallState {
        self.slot(cell, heading)
            .map_or(WallState::Wall, |index| self.slots[index])
    }

    /// Can the robot plan a move from `cell` toward `heading`?
    ///
    /// Unknown walls are treated as passable.
    #[inline]
    pub fn is_permissible(&self, cell: Cell, heading: Heading) -> bool {
        self.wall_state(cell, heading) != WallState::Wall
    }

    /// Has the wall on side `heading` of `cell` been observed as open?
    #[inline]
    pub fn is_open(&self, cell: Cell, heading: Heading) -> bool {
        self.wall_state(cell, heading) == WallState::Open
    }

    /// Are all four walls around `cell` either border or observed?
    pub fn is_known(&self, cell: Cell) -> bool {
        Heading::ALL
            .iter()
            .all(|&heading| self.wall_state(cell, heading).is_known())
    }

    /// Number of in-bounds cells whose four walls are all known
    pub fn known_cells(&self) -> usize {
        let dim = self.dim as i32;
        (0..dim)
            .flat_map(|x| (0..dim).map(move |y| Cell::new(x, y)))
            .filter(|&cell| self.is_known(cell))
            .count()
    }

    /// Fuse a sensor reading taken at `location` while facing `heading`.
    ///
    /// Each sensor's clear count opens the walls it looked through and closes
    /// the wall just past it. Rays that leave the maze stop at the border.
    /// Returns `true` if any wall slot was newly observed.
    pub fn record_sensors(
        &mut self,
        location: Cell,
        heading: Heading,
        sensors: &SensorReading,
    ) -> bool {
        let mut changed = false;

        for (direction, distance) in heading.sensor_headings().into_iter().zip(sensors.as_array()) {
            let mut cell = location;
            for _ in 0..distance {
                if !self.contains(cell) {
                    break;
                }
                changed |= self.set_wall(cell, direction, false);
                cell = cell.neighbor(direction);
            }
            if self.contains(cell) {
                changed |= self.set_wall(cell, direction, true);
            }
        }

        changed
    }

    /// Render known walls as ASCII art (y increases upward).
    ///
    /// Unknown walls are drawn as `?`.
    pub fn to_ascii(&self) -> String {
        let dim = self.dim as i32;
        let mut out = String::new();

        for y in (0..dim).rev() {
            let mut top = String::from("+");
            let mut row = String::new();
            for x in 0..dim {
                let cell = Cell::new(x, y);
                top.push_str(match self.wall_state(cell, Heading::Up) {
                    WallState::Wall => "---+",
                    WallState::Open => "   +",
                    WallState::Unknown => " ? +",
                });
                if x == 0 {
                    row.push('|');
                }
                row.push_str("   ");
                row.push(match self.wall_state(cell, Heading::Right) {
                    WallState::Wall => '|',
                    WallState::Open => ' ',
                    WallState::Unknown => '?',
                });
            }
            out.push_str(&top);
            out.push('\n');
            out.push_str(&row);
            out.push('\n');
        }

        out.push('+');
        for _ in 0..dim {
            out.push_str("---+");
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_unknown() {
        let map = WallMap::new(4);
        assert_eq!(map.dim(), 4);
        assert_eq!(map.observed_walls(), 0);
        assert_eq!(
            map.wall_state(Cell::new(1, 1), Heading::Up),
            WallState::Unknown
        );
        assert!(map.is_permissible(Cell::new(1, 1), Heading::Up));
        assert!(!map.is_known(Cell::new(1, 1)));
    }

    #[test]
    fn test_borders_are_walls() {
        let map = WallMap::new(4);
        assert!(!map.is_permissible(Cell::new(0, 0), Heading::Down));
        assert!(!map.is_permissible(Cell::new(0, 0), Heading::Left));
        assert!(!map.is_permissible(Cell::new(3, 3), Heading::Up));
        assert!(!map.is_permissible(Cell::new(3, 3), Heading::Right));
        assert_eq!(map.wall_state(Cell::new(3, 0), Heading::Right), WallState::Wall);
    }

    #[test]
    fn test_set_wall_shared_between_neighbors() {
        let mut map = WallMap::new(4);
        assert!(map.set_wall(Cell::new(1, 1), Heading::Right, true));
        assert!(!map.is_permissible(Cell::new(1, 1), Heading::Right));
        assert!(!map.is_permissible(Cell::new(2, 1), Heading::Left));
        // Same slot from the other side is already known
        assert!(!map.set_wall(Cell::new(2, 1), Heading::Left, true));
        assert_eq!(map.observed_walls(), 1);
    }

    #[test]
    fn test_first_observation_wins() {
        let mut map = WallMap::new(4);
        assert!(map.set_wall(Cell::new(0, 0), Heading::Up, false));
        assert!(!map.set_wall(Cell::new(0, 0), Heading::Up, true));
        assert!(map.is_open(Cell::new(0, 0), Heading::Up));
    }

    #[test]
    fn test_border_writes_ignored() {
        let mut map = WallMap::new(4);
        assert!(!map.set_wall(Cell::new(0, 0), Heading::Left, false));
        assert!(!map.set_wall(Cell::new(7, 7), Heading::Up, true));
        assert!(!map.is_permissible(Cell::new(0, 0), Heading::Left));
        assert_eq!(map.observed_walls(), 0);
    }

    #[test]
    fn test_is_known_counts_borders() {
        let mut map = WallMap::new(4);
        let corner = Cell::new(0, 0);
        assert!(!map.is_known(corner));
        map.set_wall(corner, Heading::Up, false);
        assert!(!map.is_known(corner));
        map.set_wall(corner, Heading::Right, true);
        assert!(map.is_known(corner));
        assert_eq!(map.known_cells(), 1);
    }

    #[test]
    fn test_record_sensors_marks_rays() {
        let mut map = WallMap::new(4);
        // Facing up at the start: left border, 2 clear ahead, 1 clear right
        let changed = map.record_sensors(
            Cell::new(0, 0),
            Heading::Up,
            &SensorReading::new(0, 2, 1),
        );
        assert!(changed);
        assert!(map.is_open(Cell::new(0, 0), Heading::Up));
        assert!(map.is_open(Cell::new(0, 1), Heading::Up));
        assert_eq!(map.wall_state(Cell::new(0, 2), Heading::Up), WallState::Wall);
        assert!(map.is_open(Cell::new(0, 0), Heading::Right));
        assert_eq!(
            map.wall_state(Cell::new(1, 0), Heading::Right),
            WallState::Wall
        );
        assert!(map.is_known(Cell::new(0, 0)));

        // Same reading again adds nothing
        assert!(!map.record_sensors(
            Cell::new(0, 0),
            Heading::Up,
            &SensorReading::new(0, 2, 1)
        ));
    }

    #[test]
    fn test_record_sensors_tolerates_long_rays() {
        let mut map = WallMap::new(4);
        let changed = map.record_sensors(
            Cell::new(0, 0),
            Heading::Up,
            &SensorReading::new(0, 1000, 0),
        );
        assert!(changed);
        for y in 0..3 {
            assert!(map.is_open(Cell::new(0, y), Heading::Up));
        }
        assert!(!map.is_permissible(Cell::new(0, 3), Heading::Up));
    }

    #[test]
    fn test_ascii_render() {
        let mut map = WallMap::new(2);
        map.set_wall(Cell::new(0, 0), Heading::Right, true);
        map.set_wall(Cell::new(0, 0), Heading::Up, false);
        let ascii = map.to_ascii();
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+---+---+");
        assert_eq!(lines[2], "+   + ? +");
        assert_eq!(lines[3], "|   |   |");
    }
}
