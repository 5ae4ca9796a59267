//! Bundled maze files parse, validate and round-trip.

use std::io::Write;

use crate::load_maze;
use vyuha::{Cell, Heading};
use vyuha_sim::{Maze, MazeError};

#[test]
fn test_bundled_mazes_are_valid() {
    for (file, dim) in [("maze_01.txt", 12), ("maze_02.txt", 14), ("maze_03.txt", 16)] {
        let maze = load_maze(file);
        assert_eq!(maze.dim(), dim, "{}", file);
        assert!(maze.validate().is_ok(), "{}", file);
        assert_eq!(Maze::from_text(&maze.to_text()).unwrap(), maze);
    }
}

#[test]
fn test_maze_01_start_cell() {
    let maze = load_maze("maze_01.txt");
    // Start cell is closed ahead and open to the right
    assert!(!maze.is_permissible(Cell::new(0, 0), Heading::Up));
    assert!(maze.is_permissible(Cell::new(0, 0), Heading::Right));
    let reading = maze.sense(Cell::new(0, 0), Heading::Up);
    assert_eq!(reading.left, 0);
    assert_eq!(reading.front, 0);
    assert!(reading.right > 0);
}

#[test]
fn test_corrupted_file_rejected() {
    let text = load_maze("maze_01.txt").to_text();
    // Open the left perimeter wall of the start cell
    let corrupted = text.replacen("\n2,", "\n10,", 1);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(corrupted.as_bytes()).unwrap();
    assert!(matches!(
        Maze::load(file.path()),
        Err(MazeError::Perimeter {
            heading: Heading::Left,
            ..
        })
    ));
}
