//! Per-cell policy table.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Heading};

/// Time value for cells the search never reached.
pub const UNREACHED: u32 = 999;

/// Suggested move out of a cell toward the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyEntry {
    /// Heading to travel in
    pub heading: Heading,
    /// Number of cells to move (1..=max movement)
    pub steps: u8,
    /// Moves remaining to the goal from this cell
    pub time: u32,
}

impl PolicyEntry {
    /// Cell this move lands on.
    #[inline]
    pub fn landing(&self, from: Cell) -> Cell {
        from.step(self.heading, i32::from(self.steps))
    }
}

/// `dim × dim` grid of policy entries and times-to-goal.
///
/// Goal cells have time 0 and no entry; unreached cells have time
/// [`UNREACHED`] and no entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyTable {
    dim: usize,
    entries: Vec<Option<PolicyEntry>>,
    times: Vec<u32>,
}

impl PolicyTable {
    /// Create a table with every cell unreached.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            entries: vec![None; dim * dim],
            times: vec![UNREACHED; dim * dim],
        }
    }

    /// Maze dimension in cells
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        cell.is_within(self.dim)
            .then(|| cell.x as usize * self.dim + cell.y as usize)
    }

    /// Policy entry at `cell`, if any.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<PolicyEntry> {
        self.index(cell).and_then(|index| self.entries[index])
    }

    /// Raw time-to-goal at `cell` ([`UNREACHED`] outside the table).
    #[inline]
    pub fn raw_time(&self, cell: Cell) -> u32 {
        self.index(cell).map_or(UNREACHED, |index| self.times[index])
    }

    /// Time-to-goal at `cell`, or `None` if the cell was not reached.
    #[inline]
    pub fn time(&self, cell: Cell) -> Option<u32> {
        let time = self.raw_time(cell);
        (time != UNREACHED).then_some(time)
    }

    /// Was `cell` reached by the search (including goal cells)?
    #[inline]
    pub fn is_reachable(&self, cell: Cell) -> bool {
        self.time(cell).is_some()
    }

    /// Mark `cell` as a goal (time 0, no entry).
    pub(super) fn seed(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(index) if self.times[index] != 0 => {
                self.times[index] = 0;
                self.entries[index] = None;
                true
            }
            _ => false,
        }
    }

    /// Overwrite the entry and time at `cell`.
    pub(super) fn set(&mut self, cell: Cell, entry: PolicyEntry) {
        if let Some(index) = self.index(cell) {
            self.times[index] = entry.time;
            self.entries[index] = Some(entry);
        }
    }

    /// Render the table as heading arrows (y increases upward).
    ///
    /// Goal cells are `G`, unreached cells `.`.
    pub fn to_ascii(&self) -> String {
        let dim = self.dim as i32;
        let mut out = String::new();
        for y in (0..dim).rev() {
            for x in 0..dim {
                let cell = Cell::new(x, y);
                out.push(match (self.get(cell), self.time(cell)) {
                    (Some(entry), _) => entry.heading.as_char(),
                    (None, Some(0)) => 'G',
                    _ => '.',
                });
            }
            out.push('\n');
        }
        out
    }
}
