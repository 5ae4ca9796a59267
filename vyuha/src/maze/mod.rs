//! Incremental maze knowledge.
//!
//! [`WallMap`] records what the robot has observed about each wall and answers
//! the planning queries used by the policy engine.

mod wall_map;

pub use wall_map::{WallMap, WallState};
