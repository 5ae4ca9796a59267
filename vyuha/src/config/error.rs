//! Configuration errors.

use thiserror::Error;

use crate::core::Cell;

/// Invalid navigator parameters. Raised before any state is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Maze dimension must be even, at least 2 and at most `MAX_MAZE_DIM`.
    #[error("Invalid maze dimension {0}: must be even, between 2 and 1024")]
    InvalidDimension(usize),

    /// Start cell outside the maze.
    #[error("Start cell {cell} outside {dim}x{dim} maze")]
    StartOutOfBounds {
        /// Offending cell
        cell: Cell,
        /// Maze dimension
        dim: usize,
    },

    /// Goal cell outside the maze.
    #[error("Goal cell {cell} outside {dim}x{dim} maze")]
    GoalOutOfBounds {
        /// Offending cell
        cell: Cell,
        /// Maze dimension
        dim: usize,
    },

    /// Maximum movement outside 1..=3.
    #[error("Invalid max movement {0}: must be between 1 and 3")]
    InvalidMaxMovement(u8),
}

/// Failure loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// YAML did not parse
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Parsed values are invalid
    #[error("Invalid config: {0}")]
    Invalid(#[from] ConfigError),
}
