use monod_core::State;

/// Event emitted by the Euler integrator for each trajectory point.
///
/// Step 0 is the initial state before any integration.
/// Steps `1..N` are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Index of the point in the trajectory.
    pub step: usize,

    /// Time of the point, `step * step_size`.
    pub time: f64,

    /// State recorded at this point, after any policy adjustment.
    pub state: State,
}
