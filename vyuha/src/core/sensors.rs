//! Range sensor readings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::heading::Rotation;

/// Rejected raw sensor input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// Reading did not contain exactly three values.
    #[error("Expected {expected} sensor values, got {actual}")]
    Arity {
        /// Required number of values
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// A sensor reported a negative distance.
    #[error("Sensor {index} reported negative distance {value}")]
    Negative {
        /// Sensor position (0 = left, 1 = front, 2 = right)
        index: usize,
        /// Offending value
        value: i64,
    },
}

/// Clear-cell counts from the three range sensors, relative to the heading.
///
/// Each value is the number of open cells between the robot and the first
/// wall in that direction. Any non-negative value is accepted; distances that
/// run past the maze border are clipped when recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SensorReading {
    /// Clear cells to the left
    pub left: u32,
    /// Clear cells ahead
    pub front: u32,
    /// Clear cells to the right
    pub right: u32,
}

impl SensorReading {
    /// Number of sensors on the robot.
    pub const COUNT: usize = 3;

    /// Create a reading from left, front and right counts
    pub fn new(left: u32, front: u32, right: u32) -> Self {
        Self { left, front, right }
    }

    /// Validate raw harness input. Values past `u32::MAX` saturate.
    pub fn from_slice(values: &[i64]) -> Result<Self, SensorError> {
        if values.len() != Self::COUNT {
            return Err(SensorError::Arity {
                expected: Self::COUNT,
                actual: values.len(),
            });
        }

        let mut parsed = [0u32; Self::COUNT];
        for (index, (&value, slot)) in values.iter().zip(parsed.iter_mut()).enumerate() {
            if value < 0 {
                return Err(SensorError::Negative { index, value });
            }
            *slot = u32::try_from(value).unwrap_or(u32::MAX);
        }

        Ok(Self::from(parsed))
    }

    /// Values in sensor order (left, front, right)
    #[inline]
    pub fn as_array(&self) -> [u32; 3] {
        [self.left, self.front, self.right]
    }

    /// Clear distance in the direction the robot faces after `rotation`.
    #[inline]
    pub fn toward(&self, rotation: Rotation) -> u32 {
        self.as_array()[rotation.sensor_index()]
    }
}

impl From<[u32; 3]> for SensorReading {
    fn from([left, front, right]: [u32; 3]) -> Self {
        Self::new(left, front, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_valid() {
        let reading = SensorReading::from_slice(&[0, 3, 11]).unwrap();
        assert_eq!(reading, SensorReading::new(0, 3, 11));
    }

    #[test]
    fn test_from_slice_rejects_wrong_arity() {
        assert_eq!(
            SensorReading::from_slice(&[1, 2]),
            Err(SensorError::Arity {
                expected: 3,
                actual: 2
            })
        );
        assert!(SensorReading::from_slice(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_from_slice_rejects_negative() {
        let err = SensorReading::from_slice(&[1, -2, 3]).unwrap_err();
        assert_eq!(err, SensorError::Negative { index: 1, value: -2 });
        assert_eq!(err.to_string(), "Sensor 1 reported negative distance -2");
    }

    #[test]
    fn test_from_slice_saturates_large_values() {
        let reading = SensorReading::from_slice(&[0, 5_000_000_000, 0]).unwrap();
        assert_eq!(reading.front, u32::MAX);
        assert_eq!(reading.left, 0);
    }

    #[test]
    fn test_toward() {
        let reading = SensorReading::new(4, 5, 6);
        assert_eq!(reading.toward(Rotation::CounterClockwise), 4);
        assert_eq!(reading.toward(Rotation::Straight), 5);
        assert_eq!(reading.toward(Rotation::Clockwise), 6);
    }
}
