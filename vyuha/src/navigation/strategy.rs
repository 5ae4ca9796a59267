//! Navigation strategy trait for harness abstraction.

use crate::core::{SensorError, SensorReading};
use crate::maze::WallMap;

use super::state::{Action, RobotState};

/// A maze-solving policy driven one sensor reading at a time.
///
/// Implement this trait to plug a navigator into a trial runner or a real
/// robot loop. The harness calls [`next_move`](Self::next_move) once per time
/// step and executes the returned action.
///
/// # Example
///
/// ```ignore
/// let mut nav = NavigationController::with_dimension(12)?;
/// let strategy: &mut dyn NavigationStrategy = &mut nav;
///
/// loop {
///     let sensors = maze.sense(robot.location, robot.heading);
///     match strategy.next_move(sensors) {
///         Action::Reset => break,
///         Action::Move { rotation, movement } => robot.execute(rotation, movement),
///     }
/// }
/// ```
pub trait NavigationStrategy {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Consume one sensor reading and decide the next action.
    ///
    /// The strategy updates its own dead-reckoned pose from the returned
    /// action. On [`Action::Reset`] it has already moved itself back to the
    /// start cell.
    fn next_move(&mut self, sensors: SensorReading) -> Action;

    /// Current pose and phase.
    fn state(&self) -> RobotState;

    /// Walls observed so far.
    fn wall_map(&self) -> &WallMap;

    /// Validate raw harness values, then run one cycle.
    ///
    /// Invalid input is rejected before any state changes.
    fn next_move_raw(&mut self, values: &[i64]) -> Result<Action, SensorError> {
        let sensors = SensorReading::from_slice(values)?;
        Ok(self.next_move(sensors))
    }
}
