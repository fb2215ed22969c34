use crate::step::StepIntegrable;

/// Biomass and substrate concentrations of a batch culture.
///
/// No bounds are enforced: explicit stepping may carry either component below
/// zero, and callers decide how to treat that.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub biomass: f64,
    pub substrate: f64,
}

/// Time derivatives of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rates {
    pub biomass: f64,
    pub substrate: f64,
}

impl State {
    /// Creates a state from biomass and substrate concentrations.
    #[must_use]
    pub fn new(biomass: f64, substrate: f64) -> Self {
        Self { biomass, substrate }
    }

    /// Total mass `biomass + substrate`, conserved under a unit yield.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.biomass + self.substrate
    }

    /// Returns `true` if either component is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.biomass < 0.0 || self.substrate < 0.0
    }

    /// Returns the state with negative components replaced by zero.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            biomass: self.biomass.max(0.0),
            substrate: self.substrate.max(0.0),
        }
    }
}

impl StepIntegrable<f64> for State {
    type Derivative = Rates;

    fn step(&self, derivative: Rates, dt: f64) -> Self {
        Self {
            biomass: self.biomass + dt * derivative.biomass,
            substrate: self.substrate + dt * derivative.substrate,
        }
    }
}
