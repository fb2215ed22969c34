use thiserror::Error;

use crate::ArgumentError;

/// Errors that can occur during Euler integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error(
        "negative concentration at step {step}: biomass = {biomass}, substrate = {substrate}"
    )]
    NegativeConcentration {
        step: usize,
        biomass: f64,
        substrate: f64,
    },
}
