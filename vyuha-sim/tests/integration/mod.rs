//! Integration tests for vyuha using the vyuha-sim maze harness
//!
//! These tests drive complete two-run trials through the
//! `NavigationStrategy` interface on the maze files in `mazes/`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vyuha-sim --test integration -- --nocapture
//! ```

mod harness;
mod scenarios;

pub use harness::{TrialCase, load_maze, run_flood_fill};
