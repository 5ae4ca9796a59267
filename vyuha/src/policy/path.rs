//! Path reconstruction from policy tables.

use crate::core::Cell;
use crate::maze::WallMap;

use super::table::PolicyTable;

/// Follow policy entries from `start` until a cell without an entry.
///
/// The result lists every landing cell, starting with `start` and ending with
/// the terminal cell (a goal, or `start` itself when it is unreachable).
/// Intermediate cells crossed by multi-cell moves are not included. The walk
/// is capped at `dim²` moves so a stale table can never loop forever.
pub fn compute_path(policy: &PolicyTable, start: Cell) -> Vec<Cell> {
    if !start.is_within(policy.dim()) {
        return Vec::new();
    }

    let max_moves = policy.dim() * policy.dim();
    let mut path = vec![start];
    let mut cell = start;

    while let Some(entry) = policy.get(cell) {
        if path.len() > max_moves {
            break;
        }
        cell = entry.landing(cell);
        path.push(cell);
    }

    path
}

/// Last cell on `path` whose walls are not all known.
///
/// Scans from the end, so the cell closest to the goal is returned first.
pub fn last_unvisited(map: &WallMap, path: &[Cell]) -> Option<Cell> {
    path.iter().rev().copied().find(|&cell| !map.is_known(cell))
}
