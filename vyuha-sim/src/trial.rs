//! Two-run timed trial.
//!
//! ```text
//!   run 0 (exploration)                     run 1 (test)
//!   ┌───────────────────────────┐           ┌──────────────────────────┐
//!   │ sense → next_move → move  │──Reset──► │ sense → next_move → move │──► goal
//!   │ Reset honoured only after │           │ Reset ignored            │
//!   │ the goal region was hit   │           └──────────────────────────┘
//!   └───────────────────────────┘
//!          shared step budget (max_time) across both runs
//! ```
//!
//! The runner keeps its own ground-truth pose. Movements are clamped to
//! `[-max_movement, max_movement]` and stop at the first wall; a blocked move
//! counts as a collision. Score is `run1 + train_score_ratio * run0`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use vyuha::policy::{DEFAULT_MAX_MOVEMENT, DEFAULT_TRAIN_SCORE_RATIO};
use vyuha::{Action, Cell, Heading, NavigationStrategy};

use crate::maze::Maze;

/// Trial harness settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Step budget shared by both runs.
    #[serde(default = "default_max_time")]
    pub max_time: u32,

    /// Weight of the exploration run in the score.
    #[serde(default = "default_train_score_ratio")]
    pub train_score_ratio: f64,

    /// Longest move the harness executes per step.
    #[serde(default = "default_max_movement")]
    pub max_movement: i32,
}

fn default_max_time() -> u32 {
    1000
}

fn default_train_score_ratio() -> f64 {
    DEFAULT_TRAIN_SCORE_RATIO
}

fn default_max_movement() -> i32 {
    i32::from(DEFAULT_MAX_MOVEMENT)
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            max_time: default_max_time(),
            train_score_ratio: default_train_score_ratio(),
            max_movement: default_max_movement(),
        }
    }
}

/// Outcome of a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Run index (0 = exploration, 1 = test)
    pub run: usize,
    /// Steps used by this run
    pub steps: u32,
    /// Did the run end normally (reset after goal, or goal reached)?
    pub completed: bool,
}

/// Outcome of a full trial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    /// Strategy name
    pub strategy: String,
    /// Runs started, in order
    pub runs: Vec<RunReport>,
    /// Steps used across all runs
    pub total_time: u32,
    /// Moves stopped short by a wall
    pub collisions: u32,
    /// Reset signals the harness refused
    pub rejected_resets: u32,
    /// Steps after which the strategy's pose disagreed with the harness
    pub desyncs: u32,
    /// Final score, when both runs completed
    pub score: Option<f64>,
}

impl TrialReport {
    /// Did both runs complete?
    pub fn is_complete(&self) -> bool {
        self.score.is_some()
    }

    /// Steps of each completed run
    pub fn runtimes(&self) -> Vec<u32> {
        self.runs
            .iter()
            .filter(|run| run.completed)
            .map(|run| run.steps)
            .collect()
    }
}

/// Harness-side pose.
#[derive(Clone, Copy, Debug)]
struct Pose {
    location: Cell,
    heading: Heading,
}

/// Runs a [`NavigationStrategy`] through a two-run trial on a [`Maze`].
#[derive(Clone, Debug)]
pub struct TrialRunner<'a> {
    maze: &'a Maze,
    config: TrialConfig,
    start: Cell,
    initial_heading: Heading,
    goals: Vec<Cell>,
}

impl<'a> TrialRunner<'a> {
    /// Standard trial: start at `(0, 0)` facing up, goal is the centre.
    pub fn new(maze: &'a Maze, config: TrialConfig) -> Self {
        Self {
            maze,
            config,
            start: Cell::new(0, 0),
            initial_heading: Heading::Up,
            goals: maze.goal_cells(),
        }
    }

    /// Override the start pose
    pub fn with_start(mut self, start: Cell, heading: Heading) -> Self {
        self.start = start;
        self.initial_heading = heading;
        self
    }

    /// Override the goal region
    pub fn with_goals(mut self, goals: Vec<Cell>) -> Self {
        self.goals = goals;
        self
    }

    /// Goal region used to end run 1
    pub fn goals(&self) -> &[Cell] {
        &self.goals
    }

    /// Run both runs and score the result.
    pub fn run(&self, strategy: &mut dyn NavigationStrategy) -> TrialReport {
        let mut report = TrialReport {
            strategy: strategy.name().to_string(),
            runs: Vec::with_capacity(2),
            total_time: 0,
            collisions: 0,
            rejected_resets: 0,
            desyncs: 0,
            score: None,
        };

        'trial: for run in 0..2 {
            info!("[Trial] Starting run {} ({})", run, report.strategy);
            let mut pose = Pose {
                location: self.start,
                heading: self.initial_heading,
            };
            let run_start = report.total_time;
            let mut hit_goal = false;

            loop {
                report.total_time += 1;
                if report.total_time > self.config.max_time {
                    report.total_time = self.config.max_time;
                    warn!("[Trial] Allotted time exceeded in run {}", run);
                    report.runs.push(RunReport {
                        run,
                        steps: report.total_time - run_start,
                        completed: false,
                    });
                    break 'trial;
                }

                let sensors = self.maze.sense(pose.location, pose.heading);
                let action = strategy.next_move(sensors);

                let (rotation, movement) = match action {
                    Action::Reset if run == 0 && hit_goal => {
                        info!(
                            "[Trial] Run 0 ended after {} steps, starting run 1",
                            report.total_time
                        );
                        report.runs.push(RunReport {
                            run,
                            steps: report.total_time - run_start,
                            completed: true,
                        });
                        break;
                    }
                    Action::Reset => {
                        if run == 0 {
                            warn!("[Trial] Cannot reset: goal not reached yet");
                        } else {
                            warn!("[Trial] Cannot reset on runs after the first");
                        }
                        report.rejected_resets += 1;
                        continue;
                    }
                    Action::Move { rotation, movement } => (rotation, movement),
                };

                pose.heading = pose.heading.rotate(rotation);
                if !self.execute_move(&mut pose, movement) {
                    report.collisions += 1;
                }

                let believed = strategy.state();
                if believed.location != pose.location || believed.heading != pose.heading {
                    report.desyncs += 1;
                    debug!(
                        "[Trial] Pose desync: strategy at {} facing {:?}, actual {} facing {:?}",
                        believed.location, believed.heading, pose.location, pose.heading
                    );
                }

                if self.goals.contains(&pose.location) {
                    hit_goal = true;
                    if run != 0 {
                        report.runs.push(RunReport {
                            run,
                            steps: report.total_time - run_start,
                            completed: true,
                        });
                        info!(
                            "[Trial] Goal found; run {} completed in {} steps",
                            run,
                            report.total_time - run_start
                        );
                        break;
                    }
                }
            }
        }

        let runtimes = report.runtimes();
        if let [explore, test] = runtimes[..] {
            let score = f64::from(test) + self.config.train_score_ratio * f64::from(explore);
            info!("[Trial] Task complete! Score: {:.3}", score);
            report.score = Some(score);
        }
        report
    }

    /// Move up to `movement` cells, stopping at walls. Returns false if a
    /// wall cut the move short.
    fn execute_move(&self, pose: &mut Pose, movement: i32) -> bool {
        let limit = self.config.max_movement;
        if movement.abs() > limit {
            warn!("[Trial] Movement {} limited to {} cells", movement, limit);
        }
        let movement = movement.clamp(-limit, limit);
        let direction = if movement >= 0 {
            pose.heading
        } else {
            pose.heading.reverse()
        };

        for _ in 0..movement.unsigned_abs() {
            if !self.maze.is_permissible(pose.location, direction) {
                warn!(
                    "[Trial] Movement stopped by wall at {} facing {:?}",
                    pose.location, direction
                );
                return false;
            }
            pose.location = pose.location.neighbor(direction);
        }
        true
    }
}
