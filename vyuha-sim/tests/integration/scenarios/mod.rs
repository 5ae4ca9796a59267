//! Trial scenarios on bundled and generated mazes

mod flood_fill;
mod maze_files;
mod random_walk;
