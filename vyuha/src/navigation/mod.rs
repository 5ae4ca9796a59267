//! Navigation strategies.
//!
//! - [`NavigationController`]: flood-fill explorer with route validation
//! - [`RandomWalk`]: seeded random baseline
//!
//! Both implement [`NavigationStrategy`], the interface a trial harness drives.

mod controller;
mod random_walk;
mod state;
mod strategy;

pub use controller::NavigationController;
pub use random_walk::RandomWalk;
pub use state::{Action, Phase, RobotState};
pub use strategy::NavigationStrategy;
