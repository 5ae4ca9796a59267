//! # Vyuha: Grid Maze Discovery and Navigation
//!
//! Navigation core for a micromouse-style robot in a square grid maze. The
//! robot starts knowing only the maze size. Each time step it receives three
//! range readings, updates its knowledge of the walls and decides a rotation
//! and a movement of up to three cells.
//!
//! A trial has two runs. The first explores until the optimal route to the
//! goal region is fully verified, then signals a reset. The second replays
//! the optimal route from the start.
//!
//! ## Quick Start
//!
//! ```rust
//! use vyuha::{Action, NavigationController, SensorReading};
//!
//! let mut nav = NavigationController::with_dimension(12).unwrap();
//! let action = nav.next_move(SensorReading::new(0, 4, 0));
//! if let Action::Move { rotation, movement } = action {
//!     println!("rotate {} deg, move {}", rotation.degrees(), movement);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! - Cell `(0, 0)` is the bottom-left corner
//! - `Up` is +Y, `Right` is +X
//! - Rotation is clockwise positive, in 90 degree steps
//! - Goal region defaults to the four centre cells
//!
//! ## Architecture
//!
//! - [`core`]: headings, cells and sensor readings
//! - [`maze`]: incremental wall knowledge ([`WallMap`])
//! - [`policy`]: flood-fill policy tables, routes and score estimates
//! - [`navigation`]: the controller state machine and baseline strategies
//! - [`config`]: YAML-backed navigator settings
//!
//! ## Data Flow
//!
//! ```text
//!     ┌─────────────────┐
//!     │  SensorReading  │  left / front / right clear cells
//!     └────────┬────────┘
//!              │ record_sensors()
//!              ▼
//!     ┌─────────────────┐
//!     │     WallMap     │  Unknown / Open / Wall per wall
//!     └────────┬────────┘
//!              │ on change
//!              ▼
//!     ┌─────────────────┐         ┌─────────────────┐
//!     │  PolicyEngine   │────────►│   PolicyTable   │  heading, steps, time
//!     │ (reverse flood) │         └────────┬────────┘
//!     └─────────────────┘                  │
//!              ┌───────────────────────────┼──────────────────┐
//!              ▼                           ▼                  ▼
//!     ┌─────────────────┐         ┌─────────────────┐  ┌─────────────┐
//!     │  compute_path   │         │ NavigationCtrl  │  │ ScoreEstim. │
//!     │ last_unvisited  │────────►│ (phase machine) │  └─────────────┘
//!     └─────────────────┘         └────────┬────────┘
//!                                          │
//!                                          ▼
//!                                   Action (rotation, movement) | Reset
//! ```

pub mod config;
pub mod core;
pub mod maze;
pub mod navigation;
pub mod policy;

// Re-export main types at crate root
pub use config::{ConfigError, ConfigLoadError, MAX_MAZE_DIM, NavigatorConfig};
pub use core::{Cell, Heading, Rotation, SensorError, SensorReading};
pub use maze::{WallMap, WallState};
pub use navigation::{Action, NavigationController, NavigationStrategy, Phase, RandomWalk, RobotState};
pub use policy::{
    PolicyEngine, PolicyEntry, PolicyTable, ScoreEstimate, compute_path, estimate_score,
    last_unvisited,
};
