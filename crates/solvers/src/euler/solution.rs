use crate::Trajectory;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Filled every point of the time grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Points computed before termination, including the initial state.
    pub trajectory: Trajectory,
}
