use thiserror::Error;

use crate::state::{Rates, State};

/// Kinetic parameters of the Monod growth law.
///
/// The specific growth rate is
///
/// ```text
/// mu(S) = mu_max * S / (k_s + S)
/// ```
///
/// and the batch balances, with an implicit yield of one, are
///
/// ```text
/// dX/dt =  mu(S) * X
/// dS/dt = -mu(S) * X
/// ```
///
/// Values are validated on construction, so every `MonodParams` has a finite,
/// non-negative `mu_max` and a finite, strictly positive `k_s`. The latter
/// keeps the rate law defined at `S = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParams", into = "RawParams")
)]
pub struct MonodParams {
    mu_max: f64,
    k_s: f64,
}

/// Errors that can occur when validating Monod parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    #[error("mu_max must be finite and non-negative, got {mu_max}")]
    MuMax { mu_max: f64 },

    #[error("k_s must be finite and strictly positive, got {k_s}")]
    HalfSaturation { k_s: f64 },
}

impl MonodParams {
    /// Maximum specific growth rate used by [`MonodParams::default`], in 1/h.
    pub const DEFAULT_MU_MAX: f64 = 0.5;

    /// Half-saturation constant used by [`MonodParams::default`], in g/L.
    pub const DEFAULT_K_S: f64 = 0.1;

    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if `mu_max` is negative or non-finite, or if `k_s` is
    /// not strictly positive and finite.
    pub fn new(mu_max: f64, k_s: f64) -> Result<Self, ParamsError> {
        if !mu_max.is_finite() || mu_max < 0.0 {
            return Err(ParamsError::MuMax { mu_max });
        }
        if !k_s.is_finite() || k_s <= 0.0 {
            return Err(ParamsError::HalfSaturation { k_s });
        }

        Ok(Self { mu_max, k_s })
    }

    /// Returns the maximum specific growth rate.
    #[must_use]
    pub fn mu_max(&self) -> f64 {
        self.mu_max
    }

    /// Returns the half-saturation constant.
    #[must_use]
    pub fn k_s(&self) -> f64 {
        self.k_s
    }

    /// Specific growth rate at the given substrate concentration.
    ///
    /// Negative substrate is evaluated as-is.
    #[must_use]
    pub fn growth_rate(&self, substrate: f64) -> f64 {
        self.mu_max * substrate / (self.k_s + substrate)
    }

    /// Rate of change of biomass.
    #[must_use]
    pub fn biomass_derivative(&self, biomass: f64, substrate: f64) -> f64 {
        self.growth_rate(substrate) * biomass
    }

    /// Rate of change of substrate.
    #[must_use]
    pub fn substrate_derivative(&self, biomass: f64, substrate: f64) -> f64 {
        -self.growth_rate(substrate) * biomass
    }

    /// Both time derivatives evaluated at `state`.
    #[must_use]
    pub fn rates(&self, state: &State) -> Rates {
        Rates {
            biomass: self.biomass_derivative(state.biomass, state.substrate),
            substrate: self.substrate_derivative(state.biomass, state.substrate),
        }
    }
}

impl Default for MonodParams {
    fn default() -> Self {
        Self {
            mu_max: Self::DEFAULT_MU_MAX,
            k_s: Self::DEFAULT_K_S,
        }
    }
}

/// Unvalidated wire form of [`MonodParams`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParams {
    mu_max: f64,
    k_s: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParams> for MonodParams {
    type Error = ParamsError;

    fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
        Self::new(raw.mu_max, raw.k_s)
    }
}

#[cfg(feature = "serde")]
impl From<MonodParams> for RawParams {
    fn from(params: MonodParams) -> Self {
        Self {
            mu_max: params.mu_max,
            k_s: params.k_s,
        }
    }
}
