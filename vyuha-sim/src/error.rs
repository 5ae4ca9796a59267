//! Error types for vyuha-sim

use vyuha::{Cell, ConfigError, ConfigLoadError, Heading};

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid or unreadable maze description.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// I/O error
    #[error("Failed to read maze: {0}")]
    Io(#[from] std::io::Error),

    /// File contained no dimension line
    #[error("Maze file is empty")]
    Empty,

    /// Dimension must be even, at least 2 and at most `MAX_MAZE_DIM`
    #[error("Invalid maze dimension {0}: must be even, between 2 and 1024")]
    InvalidDimension(usize),

    /// Token could not be parsed
    #[error("Line {line}: cannot parse {token:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },

    /// Wrong number of column lines
    #[error("Expected {expected} maze lines, found {actual}")]
    LineCount {
        /// Maze dimension
        expected: usize,
        /// Lines present
        actual: usize,
    },

    /// Wrong number of cells on a line
    #[error("Line {line}: expected {expected} cells, found {actual}")]
    LineLength {
        /// 1-based line number
        line: usize,
        /// Maze dimension
        expected: usize,
        /// Cells present
        actual: usize,
    },

    /// Wall mask outside 0..=15
    #[error("Line {line}: wall mask {mask} out of range")]
    InvalidMask {
        /// 1-based line number
        line: usize,
        /// Offending mask
        mask: u8,
    },

    /// Perimeter wall is open
    #[error("Perimeter wall open at {cell} facing {heading:?}")]
    Perimeter {
        /// Border cell
        cell: Cell,
        /// Side facing out of the maze
        heading: Heading,
    },

    /// Neighbouring cells disagree about a shared wall
    #[error("Inconsistent wall between {cell} and its {heading:?} neighbour")]
    Inconsistent {
        /// First cell
        cell: Cell,
        /// Side shared with the neighbour
        heading: Heading,
    },
}

/// vyuha-sim error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Maze file problem
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    /// Config file problem
    #[error("Config error: {0}")]
    ConfigLoad(#[from] ConfigLoadError),

    /// Navigator rejected its settings
    #[error("Navigator config error: {0}")]
    Config(#[from] ConfigError),
}
