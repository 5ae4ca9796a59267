//! Navigator configuration loading.
//!
//! Settings are plain serde structs so they can be embedded in larger YAML
//! documents (see `vyuha-sim`'s trial config) or loaded on their own.

mod error;
mod navigator;

pub use error::{ConfigError, ConfigLoadError};
pub use navigator::{MAX_MAZE_DIM, NavigatorConfig};
