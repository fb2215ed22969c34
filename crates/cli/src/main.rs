//! `monod` — run a Monod batch growth simulation and print the trajectory.
//!
//! Logs go to stderr; set `RUST_LOG` to adjust verbosity.

mod run_config;
mod table;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use monod_solvers::euler;
use tracing::info;
use tracing_subscriber::EnvFilter;

use run_config::{Overrides, RunConfig};

#[derive(Debug, Parser)]
#[command(name = "monod", version, about = "Forward Euler simulation of Monod batch growth")]
struct Cli {
    /// TOML run file; command-line values take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("monod=info,monod_solvers=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let run = config.resolve(&cli.overrides)?;

    info!(
        biomass = run.initial.biomass,
        substrate = run.initial.substrate,
        horizon = run.grid.horizon(),
        step_size = run.grid.step_size(),
        points = run.grid.points(),
        mu_max = run.params.mu_max(),
        k_s = run.params.k_s(),
        policy = %run.config.negative_policy(),
        "starting simulation"
    );

    let solution = euler::solve_unobserved(&run.params, run.initial, &run.grid, &run.config)
        .context("integration failed")?;

    let mut out = io::stdout().lock();
    table::write_table(&mut out, &solution.trajectory).context("failed to write table")?;

    info!(points = solution.trajectory.len(), "simulation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use monod_solvers::euler::NegativePolicy;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "monod",
            "--biomass",
            "0.2",
            "--step-size",
            "0.05",
            "--k-s",
            "0.3",
            "--negative-policy",
            "clamp",
        ])
        .unwrap();

        assert_eq!(cli.config, None);
        assert_eq!(cli.overrides.biomass, Some(0.2));
        assert_eq!(cli.overrides.step_size, Some(0.05));
        assert_eq!(cli.overrides.k_s, Some(0.3));
        assert_eq!(cli.overrides.negative_policy, Some(NegativePolicy::Clamp));
        assert_eq!(cli.overrides.horizon, None);
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Cli::try_parse_from(["monod", "--negative-policy", "round"]);

        assert!(result.is_err());
    }
}
