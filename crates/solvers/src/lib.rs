//! Fixed-step integrators for Monod batch growth.
//!
//! - [`euler`] — explicit forward Euler over a [`TimeGrid`]
//! - [`TimeGrid`] — validated horizon and step size
//! - [`Trajectory`] — time, biomass, and substrate sequences in lockstep

pub mod euler;
mod grid;
mod trajectory;

pub use grid::{ArgumentError, TimeGrid};
pub use trajectory::Trajectory;
