//! Trial score estimation.
//!
//! A trial is scored as `test_run_time + train_ratio * exploration_time`.
//! Knowing the optimal time `T` from the start bounds that score:
//!
//! - best: both runs follow the optimal route, `T + T * ratio`
//! - worst: exploration visits every cell first, `T + dim² * ratio`

use serde::{Deserialize, Serialize};

use crate::core::Cell;
use crate::maze::WallMap;

use super::engine::PolicyEngine;

/// Default weight of the exploration run in the trial score.
pub const DEFAULT_TRAIN_SCORE_RATIO: f64 = 1.0 / 30.0;

/// Estimated best and worst trial scores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEstimate {
    /// Optimal time from start to goal
    pub optimal_time: u32,
    /// Score when both runs are optimal
    pub best: f64,
    /// Score when exploration visits every cell
    pub worst: f64,
}

impl ScoreEstimate {
    /// Build an estimate from a known optimal time.
    pub fn from_optimal_time(optimal_time: u32, dim: usize, train_ratio: f64) -> Self {
        let time = f64::from(optimal_time);
        let cells = (dim * dim) as f64;
        Self {
            optimal_time,
            best: time + time * train_ratio,
            worst: time + cells * train_ratio,
        }
    }
}

/// Estimate the score range for reaching `goals` from `start` on `map`.
///
/// Returns `None` if no goal is reachable from `start`.
pub fn estimate_score(
    map: &WallMap,
    start: Cell,
    goals: &[Cell],
    train_ratio: f64,
) -> Option<ScoreEstimate> {
    let table = PolicyEngine::default().compute(map, goals);
    let optimal_time = table.time(start)?;
    Some(ScoreEstimate::from_optimal_time(
        optimal_time,
        map.dim(),
        train_ratio,
    ))
}
