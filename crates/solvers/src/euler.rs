//! Forward Euler integrator for Monod batch growth.
//!
//! Each step advances biomass and substrate from the immediately preceding
//! state:
//!
//! ```text
//! X_{n+1} = X_n + dt * mu(S_n) * X_n
//! S_{n+1} = S_n - dt * mu(S_n) * X_n
//! ```
//!
//! The method is first order: local truncation error is O(dt²) and global
//! error O(dt).
//!
//! # Example
//!
//! ```
//! use monod_core::MonodParams;
//! use monod_solvers::euler;
//!
//! let params = MonodParams::default();
//! let trajectory = euler::integrate(&params, 0.1, 1.0, 1.0, 0.1)?;
//!
//! assert_eq!(trajectory.len(), 10);
//! assert_eq!(trajectory.time()[3], 3.0 * 0.1);
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, NegativePolicy, ParsePolicyError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use monod_core::{MonodParams, Observer, State, StepIntegrable};
use tracing::debug;

use crate::{TimeGrid, Trajectory};

/// Integrates from scalar initial conditions with the default [`Config`].
///
/// Returns `floor(horizon / step_size)` points, with `time[i] == i * step_size`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `step_size` is not strictly positive,
/// if `horizon` is not strictly positive, or if `step_size` exceeds `horizon`,
/// checked in that order. Nothing is allocated when validation fails.
pub fn integrate(
    params: &MonodParams,
    initial_biomass: f64,
    initial_substrate: f64,
    horizon: f64,
    step_size: f64,
) -> Result<Trajectory, Error> {
    let grid = TimeGrid::new(horizon, step_size)?;
    let initial = State::new(initial_biomass, initial_substrate);

    let solution = solve_unobserved(params, initial, &grid, &Config::default())?;
    Ok(solution.trajectory)
}

/// Integrates over `grid` using forward Euler.
///
/// # Algorithm
///
/// 1. Record `initial` at time zero and emit step 0.
/// 2. For each remaining grid point:
///    - Evaluate the Monod rates at the previous state.
///    - Step the state forward: `state + rates * dt`.
///    - Apply the configured [`NegativePolicy`].
///    - Record the point and emit an [`Event`].
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// # Errors
///
/// Returns [`Error::NegativeConcentration`] if the policy is
/// [`NegativePolicy::Fail`] and a step goes below zero. No partial trajectory
/// is returned in that case.
pub fn solve<Obs>(
    params: &MonodParams,
    initial: State,
    grid: &TimeGrid,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let points = grid.points();
    let dt = grid.step_size();
    let policy = config.negative_policy();

    debug!(points, dt, %policy, "starting forward Euler run");

    let mut trajectory = Trajectory::with_capacity(points);
    trajectory.push(grid.time(0), initial);

    let event = Event {
        step: 0,
        time: grid.time(0),
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(stopped(trajectory));
    }

    let mut current = initial;

    for step in 1..points {
        let next = current.step(params.rates(&current), dt);
        let next = policy.apply(step, next)?;

        let time = grid.time(step);
        trajectory.push(time, next);

        let event = Event {
            step,
            time,
            state: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(trajectory));
        }

        current = next;
    }

    debug!(
        points,
        biomass = current.biomass,
        substrate = current.substrate,
        "forward Euler run complete"
    );

    Ok(Solution {
        status: Status::Complete,
        trajectory,
    })
}

/// Integrates over `grid` using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    params: &MonodParams,
    initial: State,
    grid: &TimeGrid,
    config: &Config,
) -> Result<Solution, Error> {
    solve(params, initial, grid, config, ())
}

fn stopped(trajectory: Trajectory) -> Solution {
    debug!(points = trajectory.len(), "forward Euler run stopped by observer");

    Solution {
        status: Status::StoppedByObserver,
        trajectory,
    }
}
