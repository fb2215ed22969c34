//! Run files and command-line overrides.
//!
//! A run file is TOML with every table optional:
//!
//! ```toml
//! negative_policy = "clamp"
//!
//! [params]
//! mu_max = 0.5
//! k_s = 0.1
//!
//! [initial]
//! biomass = 0.1
//! substrate = 1.0
//!
//! [time]
//! horizon = 10.0
//! step_size = 0.1
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use monod_core::{MonodParams, State};
use monod_solvers::{
    TimeGrid,
    euler::{Config, NegativePolicy},
};
use serde::Deserialize;

/// Contents of a TOML run file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub negative_policy: NegativePolicy,
    pub params: MonodParams,
    pub initial: InitialConfig,
    pub time: TimeConfig,
}

/// Initial concentrations, in g/L.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialConfig {
    pub biomass: f64,
    pub substrate: f64,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            biomass: 0.1,
            substrate: 1.0,
        }
    }
}

/// Horizon and step size, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeConfig {
    pub horizon: f64,
    pub step_size: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            horizon: 10.0,
            step_size: 0.1,
        }
    }
}

/// Values given on the command line, taking precedence over the run file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Initial biomass concentration (g/L).
    #[arg(long)]
    pub biomass: Option<f64>,

    /// Initial substrate concentration (g/L).
    #[arg(long)]
    pub substrate: Option<f64>,

    /// Simulated time span (h).
    #[arg(long)]
    pub horizon: Option<f64>,

    /// Integration step size (h).
    #[arg(long)]
    pub step_size: Option<f64>,

    /// Maximum specific growth rate (1/h).
    #[arg(long)]
    pub mu_max: Option<f64>,

    /// Half-saturation constant (g/L).
    #[arg(long)]
    pub k_s: Option<f64>,

    /// Handling of negative concentrations: ignore, clamp, or fail.
    #[arg(long)]
    pub negative_policy: Option<NegativePolicy>,
}

/// A fully validated run, ready to integrate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run {
    pub params: MonodParams,
    pub initial: State,
    pub grid: TimeGrid,
    pub config: Config,
}

impl RunConfig {
    /// Reads and parses a run file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid run file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read run file {}", path.display()))?;

        Self::from_toml(&text).with_context(|| format!("invalid run file {}", path.display()))
    }

    /// Parses a run file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, has unknown keys, or
    /// holds invalid kinetic parameters.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Applies command-line overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the kinetic parameters or the time grid are invalid.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Run> {
        let params = MonodParams::new(
            overrides.mu_max.unwrap_or(self.params.mu_max()),
            overrides.k_s.unwrap_or(self.params.k_s()),
        )
        .context("invalid kinetic parameters")?;

        let initial = State::new(
            overrides.biomass.unwrap_or(self.initial.biomass),
            overrides.substrate.unwrap_or(self.initial.substrate),
        );

        let grid = TimeGrid::new(
            overrides.horizon.unwrap_or(self.time.horizon),
            overrides.step_size.unwrap_or(self.time.step_size),
        )
        .context("invalid time grid")?;

        let policy = overrides.negative_policy.unwrap_or(self.negative_policy);

        Ok(Run {
            params,
            initial,
            grid,
            config: Config::new().policy(policy),
        })
    }
}
