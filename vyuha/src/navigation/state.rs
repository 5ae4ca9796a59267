//! Navigation phases, robot state and actions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Heading, Rotation};

/// Stage of a trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Searching for the goal region
    #[default]
    Exploring,
    /// Goal found; verifying unknown cells along the optimal route
    Validating,
    /// Route verified; replaying it from the start
    Testing,
}

impl Phase {
    /// Is this the final phase of a trial?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Testing)
    }

    /// Phase name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Exploring => "Exploring",
            Phase::Validating => "Validating",
            Phase::Testing => "Testing",
        }
    }
}

/// Output of one navigation cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rotate, then move `movement` cells (negative = backward).
    Move {
        /// Rotation applied before moving
        rotation: Rotation,
        /// Cells to travel, in `[-3, 3]`
        movement: i32,
    },
    /// End the current run; the caller relocates the robot to the start.
    Reset,
}

impl Action {
    /// Stay in place without rotating.
    pub const HOLD: Action = Action::Move {
        rotation: Rotation::Straight,
        movement: 0,
    };

    /// Convenience constructor
    pub fn turn_and_move(rotation: Rotation, movement: i32) -> Self {
        Action::Move { rotation, movement }
    }

    /// `(degrees, cells)` pair, or `None` for [`Action::Reset`].
    pub fn as_pair(&self) -> Option<(i32, i32)> {
        match *self {
            Action::Move { rotation, movement } => Some((rotation.degrees(), movement)),
            Action::Reset => None,
        }
    }

    /// Is this the reset signal?
    pub fn is_reset(&self) -> bool {
        matches!(self, Action::Reset)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move { rotation, movement } => {
                write!(f, "({}, {})", rotation.degrees(), movement)
            }
            Action::Reset => write!(f, "Reset"),
        }
    }
}

/// Dead-reckoned robot pose and phase.
///
/// The pose is updated from the robot's own emitted actions. Movements are
/// clamped to sensed clear distance before they are emitted, so the harness
/// executes them exactly and the pose stays in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    /// Facing direction
    pub heading: Heading,
    /// Current cell
    pub location: Cell,
    /// Current phase
    pub phase: Phase,
}

impl RobotState {
    /// Robot at `location` facing `heading`, exploring.
    pub fn new(location: Cell, heading: Heading) -> Self {
        Self {
            heading,
            location,
            phase: Phase::Exploring,
        }
    }

    /// Apply a move action to the pose. Reset is handled by the owner.
    pub fn apply(&mut self, action: Action) {
        if let Action::Move { rotation, movement } = action {
            self.heading = self.heading.rotate(rotation);
            self.location = self.location.step(self.heading, movement);
        }
    }

    /// Put the robot back at `location` facing `heading`. Phase is kept.
    pub fn relocate(&mut self, location: Cell, heading: Heading) {
        self.location = location;
        self.heading = heading;
    }
}
