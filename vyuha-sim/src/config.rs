//! Combined navigator and trial configuration loaded from YAML.
//!
//! ```yaml
//! navigator:
//!   start: { x: 0, y: 0 }
//!   initial_heading: up
//!   goals: []
//!   max_movement: 3
//! trial:
//!   max_time: 1000
//!   train_score_ratio: 0.0333333333
//! ```
//!
//! `navigator.maze_dim` is overridden by the loaded maze.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vyuha::{ConfigError, ConfigLoadError, NavigatorConfig};

use crate::maze::Maze;
use crate::trial::TrialConfig;

/// Full simulation configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Navigator settings
    #[serde(default)]
    pub navigator: NavigatorConfig,

    /// Trial harness settings
    #[serde(default)]
    pub trial: TrialConfig,
}

impl SimConfig {
    /// Parse from YAML string. Navigator values are validated later, against
    /// the maze they are used with.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Navigator settings sized for `maze`, validated.
    pub fn navigator_for(&self, maze: &Maze) -> Result<NavigatorConfig, ConfigError> {
        let config = NavigatorConfig {
            maze_dim: maze.dim(),
            ..self.navigator.clone()
        };
        config.validate()?;
        Ok(config)
    }
}
