//! Navigator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Heading};
use crate::policy::DEFAULT_MAX_MOVEMENT;

use super::error::{ConfigError, ConfigLoadError};

/// Settings for a navigation controller.
///
/// ```yaml
/// maze_dim: 12
/// start: { x: 0, y: 0 }
/// initial_heading: up
/// goals: []          # empty = the four centre cells
/// max_movement: 3
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Maze side length in cells (even, at least 2).
    #[serde(default = "default_maze_dim")]
    pub maze_dim: usize,

    /// Start cell, also the relocation target on reset.
    #[serde(default)]
    pub start: Cell,

    /// Heading at the start of each run.
    #[serde(default)]
    pub initial_heading: Heading,

    /// Goal region. Empty means the four centre cells.
    #[serde(default)]
    pub goals: Vec<Cell>,

    /// Longest straight move in cells (1..=3).
    #[serde(default = "default_max_movement")]
    pub max_movement: u8,
}

/// Largest supported maze dimension.
pub const MAX_MAZE_DIM: usize = 1024;

fn default_maze_dim() -> usize {
    12
}

fn default_max_movement() -> u8 {
    DEFAULT_MAX_MOVEMENT
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::for_dimension(default_maze_dim())
    }
}

impl NavigatorConfig {
    /// Default settings for a `dim × dim` maze.
    pub fn for_dimension(dim: usize) -> Self {
        Self {
            maze_dim: dim,
            start: Cell::new(0, 0),
            initial_heading: Heading::Up,
            goals: Vec::new(),
            max_movement: default_max_movement(),
        }
    }

    /// Replace the goal region
    pub fn with_goals(mut self, goals: Vec<Cell>) -> Self {
        self.goals = goals;
        self
    }

    /// Effective goal cells (centre cells when none are configured).
    pub fn goal_cells(&self) -> Vec<Cell> {
        if self.goals.is_empty() {
            Cell::centre_cells(self.maze_dim)
        } else {
            self.goals.clone()
        }
    }

    /// Check every parameter against the maze bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dim = self.maze_dim;
        if dim < 2 || dim % 2 != 0 || dim > MAX_MAZE_DIM {
            return Err(ConfigError::InvalidDimension(dim));
        }
        if !self.start.is_within(dim) {
            return Err(ConfigError::StartOutOfBounds {
                cell: self.start,
                dim,
            });
        }
        if let Some(&cell) = self.goals.iter().find(|goal| !goal.is_within(dim)) {
            return Err(ConfigError::GoalOutOfBounds { cell, dim });
        }
        if !(1..=DEFAULT_MAX_MOVEMENT).contains(&self.max_movement) {
            return Err(ConfigError::InvalidMaxMovement(self.max_movement));
        }
        Ok(())
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
