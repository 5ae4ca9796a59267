//! Multi-source flood fill over the wall map.
//!
//! Every move costs one time unit no matter how many cells it covers, so a
//! breadth-first relaxation from the goal cells yields optimal move counts.
//! The search runs in reverse: it expands outward from the goals and records,
//! for each landing cell, the heading that leads back toward the origin.

use std::collections::VecDeque;

use log::trace;

use crate::core::{Cell, Heading};
use crate::maze::WallMap;

use super::table::{PolicyEntry, PolicyTable};

/// Default longest straight move, in cells.
pub const DEFAULT_MAX_MOVEMENT: u8 = 3;

/// Builds policy tables from wall knowledge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyEngine {
    max_movement: u8,
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MOVEMENT)
    }
}

impl PolicyEngine {
    /// Create an engine allowing moves of up to `max_movement` cells.
    pub fn new(max_movement: u8) -> Self {
        Self {
            max_movement: max_movement.max(1),
        }
    }

    /// Longest straight move considered
    #[inline]
    pub fn max_movement(&self) -> u8 {
        self.max_movement
    }

    /// Compute the optimal-move table toward any of `goals`.
    ///
    /// Unknown walls are treated as open. Goals outside the maze are skipped.
    /// Among moves that reach a cell in equal time, the longest one is kept.
    pub fn compute(&self, map: &WallMap, goals: &[Cell]) -> PolicyTable {
        let mut table = PolicyTable::new(map.dim());
        let mut worklist = VecDeque::new();

        for &goal in goals {
            if table.seed(goal) {
                worklist.push_back(goal);
            }
        }

        let mut expanded = 0usize;
        while let Some(origin) = worklist.pop_front() {
            expanded += 1;
            let time = table.raw_time(origin) + 1;

            for heading in Heading::ALL {
                let mut landing = origin;
                for steps in 1..=self.max_movement {
                    // A blocked wall ends the scan in this heading
                    if !map.is_permissible(landing, heading) {
                        break;
                    }
                    landing = landing.neighbor(heading);

                    let stored = table.raw_time(landing);
                    let entry = PolicyEntry {
                        heading: heading.reverse(),
                        steps,
                        time,
                    };

                    if time < stored {
                        table.set(landing, entry);
                        worklist.push_back(landing);
                    } else if time == stored
                        && table.get(landing).is_some_and(|current| steps > current.steps)
                    {
                        table.set(landing, entry);
                    }
                }
            }
        }

        trace!(
            "[Policy] compute: {} goals, {} cells expanded",
            goals.len(),
            expanded
        );
        table
    }
}
