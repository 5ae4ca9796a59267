//! Random-walk baseline trials.
//!
//! The random walker never resets, so it cannot complete a trial. It must
//! still respect its sensors: no collisions and no pose desync.

use crate::load_maze;
use vyuha::{NavigationStrategy, NavigatorConfig, Phase, RandomWalk};
use vyuha_sim::{TrialConfig, TrialRunner};

#[test]
fn test_random_walk_on_bundled_maze() {
    let maze = load_maze("maze_01.txt");
    let config = NavigatorConfig::for_dimension(maze.dim());

    for seed in [1, 2, 3] {
        let mut walker = RandomWalk::new(&config, seed).unwrap();
        let report = TrialRunner::new(&maze, TrialConfig::default()).run(&mut walker);

        assert!(!report.is_complete());
        assert_eq!(report.total_time, 1000);
        assert_eq!(report.collisions, 0, "seed {}", seed);
        assert_eq!(report.desyncs, 0, "seed {}", seed);
        assert_eq!(walker.state().phase, Phase::Exploring);
        assert!(walker.wall_map().observed_walls() > 0);
    }
}

#[test]
fn test_random_walk_is_reproducible() {
    let maze = load_maze("maze_02.txt");
    let config = NavigatorConfig::for_dimension(maze.dim());
    let trial = TrialConfig {
        max_time: 300,
        ..TrialConfig::default()
    };

    let mut a = RandomWalk::new(&config, 99).unwrap();
    let mut b = RandomWalk::new(&config, 99).unwrap();
    TrialRunner::new(&maze, trial.clone()).run(&mut a);
    TrialRunner::new(&maze, trial).run(&mut b);

    assert_eq!(a.state(), b.state());
    assert_eq!(a.wall_map(), b.wall_map());
}
