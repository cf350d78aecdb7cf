//! Bouncy CLI
//!
//! Plays touch scenarios against a simulated bouncy scroll view and reports
//! where the content ended up and which listener callbacks fired.

mod report;
mod runner;
mod scenario;

use anyhow::{Context, Result};
use bouncy_scroll::BouncyConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "bouncy")]
#[command(version, about = "Run touch scenarios against a simulated bouncy scroll view")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scenario and print the report
    Simulate {
        /// Scenario JSON file
        #[arg(short, long)]
        scenario: PathBuf,

        /// Scroll view configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
    /// Print the default configuration as TOML
    Defaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Simulate {
            scenario,
            config,
            report,
        } => simulate(&scenario, config.as_deref(), report.as_deref()),
        Commands::Defaults => {
            print!("{}", BouncyConfig::default().to_toml_string()?);
            Ok(())
        }
    }
}

fn simulate(
    scenario_path: &std::path::Path,
    config_path: Option<&std::path::Path>,
    report_path: Option<&std::path::Path>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => BouncyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BouncyConfig::default(),
    };
    let scenario = Scenario::from_path(scenario_path)
        .with_context(|| format!("loading scenario {}", scenario_path.display()))?;

    tracing::info!(
        "simulating {} steps in a {}x{} viewport",
        scenario.steps.len(),
        scenario.viewport.w,
        scenario.viewport.h
    );
    let report = runner::run_scenario(&scenario, &config)?;

    match report_path {
        Some(path) => {
            report.write_to_path(path)?;
            tracing::info!("report written to {}", path.display());
        }
        None => report.write_to_writer(&mut std::io::stdout().lock())?,
    }
    Ok(())
}
