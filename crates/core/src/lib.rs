//! Core types for Monod batch growth models.
//!
//! This crate defines the kinetics model and the shared abstractions the
//! integrator builds on:
//!
//! - [`MonodParams`] — kinetic parameters and the Monod rate laws
//! - [`State`] and [`Rates`] — biomass/substrate concentrations and their
//!   time derivatives
//! - [`StepIntegrable`] — stepping a state forward by a derivative
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! # Example
//!
//! ```
//! use monod_core::{MonodParams, State, StepIntegrable};
//!
//! let params = MonodParams::new(0.5, 0.1).unwrap();
//! assert_eq!(params.growth_rate(0.1), 0.25);
//!
//! let state = State::new(0.1, 1.0);
//! let next = state.step(params.rates(&state), 0.1);
//! assert!(next.biomass > state.biomass);
//! ```

mod observer;
mod params;
mod state;
mod step;

pub use observer::Observer;
pub use params::{MonodParams, ParamsError};
pub use state::{Rates, State};
pub use step::{DerivativeOf, StepIntegrable};
