//! Flood-fill navigation controller.
//!
//! Per sensor reading the controller:
//!
//! 1. Fuses the reading into the [`WallMap`]
//! 2. Recomputes the goal policy and optimal route if anything changed
//! 3. Advances the phase machine
//! 4. Picks the policy to follow (goal policy, or a single-target policy
//!    toward the next unverified route cell while validating)
//! 5. Converts the policy entry at the current cell into an [`Action`]
//!
//! ```text
//!   Exploring ──(on goal cell)──► Validating ──(route fully known)──► Testing
//!                                                  emits Reset
//! ```

use log::{debug, info, trace};

use crate::config::{ConfigError, NavigatorConfig};
use crate::core::{Cell, Heading, Rotation, SensorReading};
use crate::maze::WallMap;
use crate::policy::{
    PolicyEngine, PolicyTable, ScoreEstimate, compute_path, last_unvisited,
};

use super::state::{Action, Phase, RobotState};
use super::strategy::NavigationStrategy;

/// Policy toward a single unverified cell.
#[derive(Clone, Debug)]
struct ValidationPlan {
    target: Cell,
    policy: PolicyTable,
}

/// Deterministic maze navigator.
///
/// Owns all wall knowledge for a trial. Wall observations persist across
/// phases; only the pose is reset when testing begins.
#[derive(Clone, Debug)]
pub struct NavigationController {
    /// Configuration
    config: NavigatorConfig,
    /// Goal region
    goals: Vec<Cell>,
    /// Policy search
    engine: PolicyEngine,
    /// Pose and phase
    state: RobotState,
    /// Observed walls
    wall_map: WallMap,
    /// Policy toward the goal region
    policy: PolicyTable,
    /// Optimal route from the start cell under current knowledge
    optimal_path: Vec<Cell>,
    /// Active validation target, rebuilt when the map changes
    validation: Option<ValidationPlan>,
    /// Cycles processed
    cycles: usize,
}

impl NavigationController {
    /// Create a controller. Fails on invalid configuration.
    pub fn new(config: NavigatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let goals = config.goal_cells();
        let engine = PolicyEngine::new(config.max_movement);
        let wall_map = WallMap::new(config.maze_dim);
        let policy = engine.compute(&wall_map, &goals);
        let optimal_path = compute_path(&policy, config.start);

        info!(
            "[Nav] Created: {}x{} maze, start={}, {} goal cells",
            config.maze_dim,
            config.maze_dim,
            config.start,
            goals.len()
        );

        Ok(Self {
            state: RobotState::new(config.start, config.initial_heading),
            config,
            goals,
            engine,
            wall_map,
            policy,
            optimal_path,
            validation: None,
            cycles: 0,
        })
    }

    /// Create with default settings for a `dim × dim` maze
    pub fn with_dimension(dim: usize) -> Result<Self, ConfigError> {
        Self::new(NavigatorConfig::for_dimension(dim))
    }

    /// Get configuration
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Current heading
    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    /// Current cell
    pub fn location(&self) -> Cell {
        self.state.location
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Observed walls
    pub fn wall_map(&self) -> &WallMap {
        &self.wall_map
    }

    /// Policy toward the goal region
    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    /// Optimal route from the start cell under current knowledge
    pub fn optimal_path(&self) -> &[Cell] {
        &self.optimal_path
    }

    /// Goal region
    pub fn goals(&self) -> &[Cell] {
        &self.goals
    }

    /// Start cell
    pub fn start(&self) -> Cell {
        self.config.start
    }

    /// Cell currently being verified, if validating
    pub fn validation_target(&self) -> Option<Cell> {
        self.validation.as_ref().map(|plan| plan.target)
    }

    /// Number of cycles processed
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Score range implied by the current optimal time from the start.
    pub fn estimate_score(&self, train_ratio: f64) -> Option<ScoreEstimate> {
        let optimal_time = self.policy.time(self.config.start)?;
        Some(ScoreEstimate::from_optimal_time(
            optimal_time,
            self.config.maze_dim,
            train_ratio,
        ))
    }

    /// Fuse a sensor reading into the wall map.
    ///
    /// Recomputes the goal policy and optimal route when new walls were
    /// observed. Returns whether the map changed.
    pub fn update_maze(&mut self, sensors: &SensorReading) -> bool {
        let changed =
            self.wall_map
                .record_sensors(self.state.location, self.state.heading, sensors);
        if changed {
            self.replan();
        }
        changed
    }

    fn replan(&mut self) {
        self.policy = self.engine.compute(&self.wall_map, &self.goals);
        self.optimal_path = compute_path(&self.policy, self.config.start);
        self.validation = None;
        debug!(
            "[Nav] Replanned: {} walls observed, optimal time={:?}, route={} cells",
            self.wall_map.observed_walls(),
            self.policy.time(self.config.start),
            self.optimal_path.len()
        );
    }

    /// Run one navigation cycle for a sensor reading.
    pub fn next_move(&mut self, sensors: SensorReading) -> Action {
        self.cycles += 1;
        self.update_maze(&sensors);

        if self.state.phase == Phase::Exploring && self.goals.contains(&self.state.location) {
            info!(
                "[Nav] Exploring -> Validating: goal {} reached after {} cycles",
                self.state.location, self.cycles
            );
            self.state.phase = Phase::Validating;
        }

        let action = if self.state.phase == Phase::Validating {
            match self.find_validation_target() {
                None => return self.begin_testing(),
                Some(target) if target == self.state.location => {
                    // Standing on the target: turn to sense the unseen side
                    trace!("[Nav] On validation target {}, turning", target);
                    Action::turn_and_move(Rotation::Clockwise, 0)
                }
                Some(target) => {
                    self.prepare_validation(target);
                    let policy = self
                        .validation
                        .as_ref()
                        .map_or(&self.policy, |plan| &plan.policy);
                    self.next_action(policy, &sensors)
                }
            }
        } else {
            self.next_action(&self.policy, &sensors)
        };

        self.state.apply(action);
        trace!(
            "[Nav] cycle={} phase={} sensors={:?} action={} -> {} facing {:?}",
            self.cycles,
            self.state.phase.name(),
            sensors.as_array(),
            action,
            self.state.location,
            self.state.heading
        );
        action
    }

    /// Last unknown cell on the optimal route followed by the goal cells.
    fn find_validation_target(&self) -> Option<Cell> {
        let route: Vec<Cell> = self
            .optimal_path
            .iter()
            .chain(self.goals.iter())
            .copied()
            .collect();
        last_unvisited(&self.wall_map, &route)
    }

    /// Make sure a policy toward `target` exists for the current map.
    fn prepare_validation(&mut self, target: Cell) {
        if self.validation_target() == Some(target) {
            return;
        }
        debug!(
            "[Nav] Validation target {} (from {})",
            target, self.state.location
        );
        self.validation = Some(ValidationPlan {
            target,
            policy: self.engine.compute(&self.wall_map, &[target]),
        });
    }

    fn begin_testing(&mut self) -> Action {
        info!(
            "[Nav] Validating -> Testing: route verified, optimal time={:?}, {} cells known after {} cycles",
            self.policy.time(self.config.start),
            self.wall_map.known_cells(),
            self.cycles
        );
        self.state.phase = Phase::Testing;
        self.state
            .relocate(self.config.start, self.config.initial_heading);
        self.validation = None;
        Action::Reset
    }

    /// Convert the policy entry at the current cell into an action.
    ///
    /// A move toward the reverse heading is driven backward instead of
    /// turning around. Movement never exceeds the sensed clear distance.
    pub fn next_action(&self, policy: &PolicyTable, sensors: &SensorReading) -> Action {
        let Some(entry) = policy.get(self.state.location) else {
            return Action::HOLD;
        };
        let steps = u32::from(entry.steps);

        match self.state.heading.rotation_to(entry.heading) {
            Some(rotation) => {
                let movement = steps.min(sensors.toward(rotation));
                Action::turn_and_move(rotation, movement as i32)
            }
            None => match self.clear_behind(steps) {
                // Nothing verified behind us: turn so the sensors can see it
                0 => Action::turn_and_move(Rotation::Clockwise, 0),
                clear => Action::turn_and_move(Rotation::Straight, -(clear as i32)),
            },
        }
    }

    /// Consecutive known-open walls behind the robot, up to `limit`.
    fn clear_behind(&self, limit: u32) -> u32 {
        let backward = self.state.heading.reverse();
        let mut cell = self.state.location;
        let mut clear = 0;
        while clear < limit && self.wall_map.is_open(cell, backward) {
            clear += 1;
            cell = cell.neighbor(backward);
        }
        clear
    }
}

impl NavigationStrategy for NavigationController {
    fn name(&self) -> &'static str {
        "flood-fill"
    }

    fn next_move(&mut self, sensors: SensorReading) -> Action {
        NavigationController::next_move(self, sensors)
    }

    fn state(&self) -> RobotState {
        self.state
    }

    fn wall_map(&self) -> &WallMap {
        &self.wall_map
    }
}
