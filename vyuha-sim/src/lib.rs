//! # Vyuha-Sim: Maze Simulation and Trial Harness
//!
//! Hardware-free environment for [`vyuha`] navigators:
//!
//! - [`maze`]: ground-truth maze loaded from the text format, with simulated
//!   range sensors
//! - [`trial`]: two-run timed trial with scoring
//! - [`config`]: combined navigator and trial settings from YAML
//!
//! ```text
//!   ┌────────────┐  sense()   ┌─────────────────────┐
//!   │    Maze    │──────────► │ NavigationStrategy  │
//!   │ (truth)    │ ◄──────────│ (controller/random) │
//!   └────────────┘   Action   └─────────────────────┘
//!         ▲                              │
//!         └──────── TrialRunner ◄────────┘
//!               (pose, time, score)
//! ```

pub mod config;
pub mod error;
pub mod maze;
pub mod trial;

pub use config::SimConfig;
pub use error::{Error, MazeError, Result};
pub use maze::Maze;
pub use trial::{RunReport, TrialConfig, TrialReport, TrialRunner};
