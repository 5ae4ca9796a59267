//! Shared helpers for trial scenarios.

use std::path::PathBuf;

use vyuha::{NavigationController, NavigatorConfig};
use vyuha_sim::{Maze, TrialConfig, TrialReport, TrialRunner};

/// Expected outcome of a flood-fill trial on a bundled maze.
#[derive(Debug, Clone, Copy)]
pub struct TrialCase {
    /// File name under `mazes/`
    pub file: &'static str,
    /// Maze dimension
    pub dim: usize,
    /// Steps of the exploration and test runs
    pub runtimes: [u32; 2],
    /// Optimal time from the start cell
    pub optimal_time: u32,
}

/// Load a bundled maze.
pub fn load_maze(file: &str) -> Maze {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("mazes")
        .join(file);
    Maze::load(&path).unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

/// Run the flood-fill controller through a default trial on `maze`.
pub fn run_flood_fill(maze: &Maze) -> (NavigationController, TrialReport) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut nav = NavigationController::new(NavigatorConfig::for_dimension(maze.dim()))
        .expect("valid navigator config");
    let report = TrialRunner::new(maze, TrialConfig::default()).run(&mut nav);
    (nav, report)
}
