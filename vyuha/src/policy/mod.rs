//! Flood-fill policy computation.
//!
//! - [`PolicyEngine`]: multi-source reverse search producing a [`PolicyTable`]
//! - [`compute_path`] / [`last_unvisited`]: walking a table into a route
//! - [`estimate_score`]: best/worst trial score from the optimal time

mod engine;
mod path;
mod score;
mod table;

pub use engine::{DEFAULT_MAX_MOVEMENT, PolicyEngine};
pub use path::{compute_path, last_unvisited};
pub use score::{DEFAULT_TRAIN_SCORE_RATIO, ScoreEstimate, estimate_score};
pub use table::{PolicyEntry, PolicyTable, UNREACHED};
