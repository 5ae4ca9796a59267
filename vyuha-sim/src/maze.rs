//! Ground-truth maze for simulation.
//!
//! # File Format
//!
//! ```text
//! 12                          <- dimension
//! 2,3,5,7,6,1,7,6,1,7,7,4     <- column x = 0, cells y = 0..dim
//! 10,9,6,10,9,5,12,9,5,14,9,6 <- column x = 1
//! ...                         <- dim column lines in total
//! ```
//!
//! Each cell is a 4-bit mask of its open sides:
//!
//! | Bit | Side  |
//! |-----|-------|
//! | 1   | up    |
//! | 2   | right |
//! | 4   | down  |
//! | 8   | left  |
//!
//! A valid maze is closed on the perimeter and agrees with itself: both
//! cells on either side of a wall report the same state.

use std::path::Path;

use log::debug;
use vyuha::{Cell, Heading, MAX_MAZE_DIM, SensorReading, WallMap};

use crate::error::MazeError;

/// Bit of the open-side mask for a heading.
#[inline]
const fn side_bit(heading: Heading) -> u8 {
    1 << heading.index()
}

const ALL_OPEN: u8 = 0b1111;

/// Fully known square maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    dim: usize,
    /// Open-side masks, indexed `x * dim + y`
    masks: Vec<u8>,
}

impl Maze {
    /// Maze with only the perimeter walls.
    pub fn open(dim: usize) -> Self {
        let mut maze = Self {
            dim,
            masks: vec![ALL_OPEN; dim * dim],
        };
        for x in 0..dim as i32 {
            for y in 0..dim as i32 {
                let cell = Cell::new(x, y);
                for heading in Heading::ALL {
                    if !cell.neighbor(heading).is_within(dim) {
                        maze.close_side(cell, heading);
                    }
                }
            }
        }
        maze
    }

    /// Parse the text format.
    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, dim_line) = lines.next().ok_or(MazeError::Empty)?;
        let dim: usize = dim_line.parse().map_err(|_| MazeError::Parse {
            line: line_no,
            token: dim_line.to_string(),
        })?;
        if dim < 2 || dim % 2 != 0 || dim > MAX_MAZE_DIM {
            return Err(MazeError::InvalidDimension(dim));
        }

        let mut masks = Vec::with_capacity(dim * dim);
        let mut columns = 0;
        for (line_no, line) in lines {
            columns += 1;
            if columns > dim {
                continue;
            }
            let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
            if tokens.len() != dim {
                return Err(MazeError::LineLength {
                    line: line_no,
                    expected: dim,
                    actual: tokens.len(),
                });
            }
            for token in tokens {
                let mask: u8 = token.parse().map_err(|_| MazeError::Parse {
                    line: line_no,
                    token: token.to_string(),
                })?;
                if mask > ALL_OPEN {
                    return Err(MazeError::InvalidMask {
                        line: line_no,
                        mask,
                    });
                }
                masks.push(mask);
            }
        }
        if columns != dim {
            return Err(MazeError::LineCount {
                expected: dim,
                actual: columns,
            });
        }

        let maze = Self { dim, masks };
        maze.validate()?;
        debug!("[Maze] Parsed {}x{} maze", dim, dim);
        Ok(maze)
    }

    /// Load and parse a maze file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MazeError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_text(&contents)
    }

    /// Check perimeter closure and shared-wall consistency.
    pub fn validate(&self) -> Result<(), MazeError> {
        for x in 0..self.dim as i32 {
            for y in 0..self.dim as i32 {
                let cell = Cell::new(x, y);
                for heading in Heading::ALL {
                    let neighbor = cell.neighbor(heading);
                    let open = self.is_permissible(cell, heading);
                    if !neighbor.is_within(self.dim) {
                        if open {
                            return Err(MazeError::Perimeter { cell, heading });
                        }
                    } else if open != self.is_permissible(neighbor, heading.reverse()) {
                        return Err(MazeError::Inconsistent { cell, heading });
                    }
                }
            }
        }
        Ok(())
    }

    /// Side length in cells
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Four centre cells, the goal region of a standard trial
    pub fn goal_cells(&self) -> Vec<Cell> {
        Cell::centre_cells(self.dim)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        cell.is_within(self.dim)
            .then(|| cell.x as usize * self.dim + cell.y as usize)
    }

    fn close_side(&mut self, cell: Cell, heading: Heading) {
        if let Some(index) = self.index(cell) {
            self.masks[index] &= !side_bit(heading);
        }
    }

    /// Close the wall on side `heading` of `cell`, on both sides.
    ///
    /// Returns false if the cell is outside the maze.
    pub fn add_wall(&mut self, cell: Cell, heading: Heading) -> bool {
        if !cell.is_within(self.dim) {
            return false;
        }
        self.close_side(cell, heading);
        self.close_side(cell.neighbor(heading), heading.reverse());
        true
    }

    /// Can the robot leave `cell` toward `heading`?
    pub fn is_permissible(&self, cell: Cell, heading: Heading) -> bool {
        self.index(cell)
            .is_some_and(|index| self.masks[index] & side_bit(heading) != 0)
    }

    /// Open cells between `cell` and the first wall toward `heading`.
    pub fn dist_to_wall(&self, cell: Cell, heading: Heading) -> u32 {
        let mut distance = 0;
        let mut current = cell;
        while self.is_permissible(current, heading) {
            distance += 1;
            current = current.neighbor(heading);
        }
        distance
    }

    /// Sensor reading for a robot at `location` facing `heading`.
    pub fn sense(&self, location: Cell, heading: Heading) -> SensorReading {
        let [left, front, right] = heading
            .sensor_headings()
            .map(|side| self.dist_to_wall(location, side));
        SensorReading::new(left, front, right)
    }

    /// Fully observed [`WallMap`] of this maze.
    pub fn to_wall_map(&self) -> WallMap {
        let mut map = WallMap::new(self.dim);
        for x in 0..self.dim as i32 {
            for y in 0..self.dim as i32 {
                let cell = Cell::new(x, y);
                for heading in Heading::ALL {
                    map.set_wall(cell, heading, !self.is_permissible(cell, heading));
                }
            }
        }
        map
    }

    /// Serialize to the text format.
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n", self.dim);
        for column in self.masks.chunks(self.dim) {
            let line: Vec<String> = column.iter().map(u8::to_string).collect();
            text.push_str(&line.join(","));
            text.push('\n');
        }
        text
    }
}
