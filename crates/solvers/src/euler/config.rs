use std::{fmt, str::FromStr};

use monod_core::State;
use thiserror::Error;
use tracing::{debug, warn};

use super::Error;

/// What to do when a step produces a negative concentration.
///
/// Explicit Euler can overshoot below zero when the step size is large
/// compared to the growth time scale. The policy only looks at stepped
/// states; the initial state is recorded as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NegativePolicy {
    /// Keep the raw Euler value.
    #[default]
    Ignore,

    /// Replace negative components with zero and continue from there.
    Clamp,

    /// Abort the run with [`Error::NegativeConcentration`].
    Fail,
}

/// Error returned when parsing an unknown [`NegativePolicy`] name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown negative policy `{0}`, expected one of: ignore, clamp, fail")]
pub struct ParsePolicyError(String);

impl NegativePolicy {
    /// Applies the policy to the state produced by integration step `step`.
    pub(crate) fn apply(self, step: usize, state: State) -> Result<State, Error> {
        if !state.is_negative() {
            return Ok(state);
        }

        match self {
            Self::Ignore => Ok(state),
            Self::Clamp => {
                debug!(
                    step,
                    biomass = state.biomass,
                    substrate = state.substrate,
                    "clamping negative concentration"
                );
                Ok(state.clamped())
            }
            Self::Fail => {
                warn!(
                    step,
                    biomass = state.biomass,
                    substrate = state.substrate,
                    "aborting on negative concentration"
                );
                Err(Error::NegativeConcentration {
                    step,
                    biomass: state.biomass,
                    substrate: state.substrate,
                })
            }
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Clamp => "clamp",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for NegativePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NegativePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "clamp" => Ok(Self::Clamp),
            "fail" => Ok(Self::Fail),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

/// Configuration for the Euler integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    policy: NegativePolicy,
}

impl Config {
    /// Creates a config with the default [`NegativePolicy::Ignore`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the negative concentration policy.
    #[must_use]
    pub fn policy(mut self, policy: NegativePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the negative concentration policy.
    #[must_use]
    pub fn negative_policy(&self) -> NegativePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_states_pass_every_policy() {
        let state = State::new(0.0, 0.3);

        for policy in [
            NegativePolicy::Ignore,
            NegativePolicy::Clamp,
            NegativePolicy::Fail,
        ] {
            assert_eq!(policy.apply(4, state), Ok(state));
        }
    }

    #[test]
    fn ignore_keeps_raw_values() {
        let state = State::new(1.0, -0.2);

        assert_eq!(NegativePolicy::Ignore.apply(1, state), Ok(state));
    }

    #[test]
    fn clamp_zeroes_negative_components() {
        let state = State::new(1.0, -0.2);

        assert_eq!(
            NegativePolicy::Clamp.apply(1, state),
            Ok(State::new(1.0, 0.0))
        );
    }

    #[test]
    fn fail_reports_step_and_state() {
        let state = State::new(-0.1, 0.5);

        assert_eq!(
            NegativePolicy::Fail.apply(7, state),
            Err(Error::NegativeConcentration {
                step: 7,
                biomass: -0.1,
                substrate: 0.5,
            })
        );
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("ignore".parse(), Ok(NegativePolicy::Ignore));
        assert_eq!("Clamp".parse(), Ok(NegativePolicy::Clamp));
        assert_eq!(" fail ".parse(), Ok(NegativePolicy::Fail));
        assert_eq!(
            "round".parse::<NegativePolicy>(),
            Err(ParsePolicyError("round".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for policy in [
            NegativePolicy::Ignore,
            NegativePolicy::Clamp,
            NegativePolicy::Fail,
        ] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }

    #[test]
    fn config_builder_sets_policy() {
        assert_eq!(Config::new().negative_policy(), NegativePolicy::Ignore);
        assert_eq!(
            Config::new()
                .policy(NegativePolicy::Clamp)
                .negative_policy(),
            NegativePolicy::Clamp
        );
    }
}
