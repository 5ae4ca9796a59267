//! Random-walk baseline navigator.
//!
//! Picks a random rotation and a short random movement every cycle. It still
//! records walls, so its map can be inspected after a trial, but never plans
//! and never signals a reset.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, NavigatorConfig};
use crate::core::{Rotation, SensorReading};
use crate::maze::WallMap;

use super::state::{Action, RobotState};
use super::strategy::NavigationStrategy;

/// Seeded random-walk navigator.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    state: RobotState,
    wall_map: WallMap,
    rng: StdRng,
    /// Exclusive upper bound on the random movement
    max_movement: u8,
    seed: u64,
}

impl RandomWalk {
    /// Create a random walker. The same seed replays the same choices
    /// for the same sensor readings.
    pub fn new(config: &NavigatorConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            "[Random] Created: {}x{} maze, seed={}",
            config.maze_dim, config.maze_dim, seed
        );
        Ok(Self {
            state: RobotState::new(config.start, config.initial_heading),
            wall_map: WallMap::new(config.maze_dim),
            rng: StdRng::seed_from_u64(seed),
            max_movement: config.max_movement,
            seed,
        })
    }

    /// Seed the walker was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NavigationStrategy for RandomWalk {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_move(&mut self, sensors: SensorReading) -> Action {
        self.wall_map
            .record_sensors(self.state.location, self.state.heading, &sensors);

        let rotation = Rotation::ALL[self.rng.random_range(0..Rotation::ALL.len())];
        let wanted = self.rng.random_range(0..u32::from(self.max_movement));
        let movement = wanted.min(sensors.toward(rotation));

        let action = Action::turn_and_move(rotation, movement as i32);
        self.state.apply(action);
        trace!(
            "[Random] sensors={:?} action={} -> {}",
            sensors.as_array(),
            action,
            self.state.location
        );
        action
    }

    fn state(&self) -> RobotState {
        self.state
    }

    fn wall_map(&self) -> &WallMap {
        &self.wall_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Heading};
    use crate::navigation::Phase;

    #[test]
    fn test_same_seed_same_walk() {
        let config = NavigatorConfig::for_dimension(8);
        let mut a = RandomWalk::new(&config, 7).unwrap();
        let mut b = RandomWalk::new(&config, 7).unwrap();
        let sensors = SensorReading::new(0, 0, 0);
        for _ in 0..20 {
            assert_eq!(a.next_move(sensors), b.next_move(sensors));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_walled_in_never_moves() {
        let config = NavigatorConfig::for_dimension(8);
        let mut walker = RandomWalk::new(&config, 42).unwrap();
        for _ in 0..50 {
            let action = walker.next_move(SensorReading::new(0, 0, 0));
            let Action::Move { movement, .. } = action else {
                panic!("random walk never resets");
            };
            assert_eq!(movement, 0);
        }
        assert_eq!(walker.state().location, Cell::new(0, 0));
        assert_eq!(walker.state().phase, Phase::Exploring);
    }

    #[test]
    fn test_movement_bounded() {
        let config = NavigatorConfig::for_dimension(16);
        let mut walker = RandomWalk::new(&config, 3).unwrap();
        // Start mid-maze so every direction has room
        walker.state.relocate(Cell::new(8, 8), Heading::Up);
        for _ in 0..50 {
            let action = walker.next_move(SensorReading::new(5, 5, 5));
            let (degrees, movement) = action.as_pair().unwrap();
            assert!(Rotation::from_degrees(degrees).is_some());
            assert!((0..3).contains(&movement));
            let heading = walker.state().heading;
            walker.state.relocate(Cell::new(8, 8), heading);
        }
    }

    #[test]
    fn test_records_walls() {
        let config = NavigatorConfig::for_dimension(4);
        let mut walker = RandomWalk::new(&config, 1).unwrap();
        walker.next_move(SensorReading::new(0, 1, 0));
        assert!(walker.wall_map().observed_walls() > 0);
        assert_eq!(walker.name(), "random");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = NavigatorConfig::for_dimension(3);
        assert!(RandomWalk::new(&config, 0).is_err());
    }
}
