//! Core types for the vyuha maze navigator.
//!
//! - [`Heading`] and [`Rotation`]: direction arithmetic backed by constant tables
//! - [`Cell`]: maze cell coordinates
//! - [`SensorReading`]: left/front/right clear-cell counts

mod cell;
mod heading;
mod sensors;

pub use cell::Cell;
pub use heading::{Heading, Rotation};
pub use sensors::{SensorError, SensorReading};
