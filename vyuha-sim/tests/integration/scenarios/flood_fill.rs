//! Flood-fill controller trials.
//!
//! Each bundled maze is run end to end. The controller must finish both runs
//! without a collision or pose desync, and the test run must match the
//! optimal time computed from the fully known maze.

use crate::{TrialCase, load_maze, run_flood_fill};
use approx::assert_relative_eq;
use vyuha::policy::DEFAULT_TRAIN_SCORE_RATIO;
use vyuha::{Cell, Heading, NavigationController, Phase, estimate_score};
use vyuha_sim::{Maze, TrialConfig, TrialRunner};

const CASES: [TrialCase; 3] = [
    TrialCase {
        file: "maze_01.txt",
        dim: 12,
        runtimes: [30, 8],
        optimal_time: 8,
    },
    TrialCase {
        file: "maze_02.txt",
        dim: 14,
        runtimes: [135, 48],
        optimal_time: 48,
    },
    TrialCase {
        file: "maze_03.txt",
        dim: 16,
        runtimes: [146, 11],
        optimal_time: 11,
    },
];

fn check_case(case: &TrialCase) {
    let maze = load_maze(case.file);
    assert_eq!(maze.dim(), case.dim);

    let (nav, report) = run_flood_fill(&maze);
    assert!(report.is_complete(), "{}: {:?}", case.file, report);
    assert_eq!(report.runtimes(), case.runtimes.to_vec(), "{}", case.file);
    assert_eq!(report.collisions, 0);
    assert_eq!(report.desyncs, 0);
    assert_eq!(report.rejected_resets, 0);

    let expected =
        f64::from(case.runtimes[1]) + DEFAULT_TRAIN_SCORE_RATIO * f64::from(case.runtimes[0]);
    assert_relative_eq!(report.score.unwrap(), expected, epsilon = 1e-9);

    // Test run is optimal for the true maze
    let estimate = estimate_score(
        &maze.to_wall_map(),
        Cell::new(0, 0),
        &maze.goal_cells(),
        DEFAULT_TRAIN_SCORE_RATIO,
    )
    .unwrap();
    assert_eq!(estimate.optimal_time, case.optimal_time);
    assert_eq!(case.runtimes[1], estimate.optimal_time);
    assert!(report.score.unwrap() >= estimate.best - 1e-9);
    assert!(report.score.unwrap() <= estimate.worst + 1e-9);

    // The controller's own estimate agrees once the route is verified
    assert_eq!(nav.phase(), Phase::Testing);
    let own = nav.estimate_score(DEFAULT_TRAIN_SCORE_RATIO).unwrap();
    assert_eq!(own.optimal_time, case.optimal_time);
}

#[test]
fn test_maze_01() {
    check_case(&CASES[0]);
}

#[test]
fn test_maze_02() {
    check_case(&CASES[1]);
}

#[test]
fn test_maze_03() {
    check_case(&CASES[2]);
}

#[test]
fn test_open_maze_trial() {
    let (nav, report) = run_flood_fill(&Maze::open(4));
    assert_eq!(report.runtimes(), vec![6, 2]);
    assert_eq!(report.total_time, 8);
    assert!(nav.goals().contains(&nav.location()));
}

#[test]
fn test_score_scenario_one_move() {
    // Goal three cells straight ahead of the start
    let maze = Maze::open(4);
    let estimate = estimate_score(&maze.to_wall_map(), Cell::new(0, 0), &[Cell::new(0, 2)], 1.0 / 30.0)
        .unwrap();
    assert_eq!(estimate.optimal_time, 1);
    assert_relative_eq!(estimate.best, 1.0 + 1.0 / 30.0);
    assert_relative_eq!(estimate.worst, 1.0 + 16.0 / 30.0);
}

#[test]
fn test_walled_corridor_forces_turn() {
    // Start faces a wall; the only exit is to the right
    let mut maze = Maze::open(6);
    maze.add_wall(Cell::new(0, 0), Heading::Up);

    let mut nav = NavigationController::with_dimension(6).unwrap();
    let report = TrialRunner::new(&maze, TrialConfig::default()).run(&mut nav);
    assert!(report.is_complete());
    assert_eq!(report.collisions, 0);
    assert_eq!(report.desyncs, 0);
}

#[test]
fn test_unreachable_goal_times_out() {
    // Centre sealed off: the controller holds once it knows, trial times out
    let mut maze = Maze::open(4);
    for cell in maze.goal_cells() {
        for heading in Heading::ALL {
            maze.add_wall(cell, heading);
        }
    }
    let config = TrialConfig {
        max_time: 100,
        ..TrialConfig::default()
    };
    let mut nav = NavigationController::with_dimension(4).unwrap();
    let report = TrialRunner::new(&maze, config).run(&mut nav);

    assert!(!report.is_complete());
    assert_eq!(report.total_time, 100);
    assert_eq!(report.collisions, 0);
    assert_eq!(nav.phase(), Phase::Exploring);
    assert!(nav.policy().time(nav.location()).is_none());
}
