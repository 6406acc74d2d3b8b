//! Brewboard CLI - ranked view of Homebrew packages and services.

use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::time::Duration;

use bb_core::PackageClass;
use bb_io::{BrewLocator, Brewboard, RunnerConfig};

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "bb")]
#[command(about = "Brewboard - Homebrew packages and services at a glance")]
#[command(version)]
struct Cli {
    /// Path to the brew executable (probed in the usual prefixes if omitted)
    #[arg(long)]
    brew: Option<PathBuf>,

    /// Seconds to wait for each brew invocation
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show installed packages, running services first
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Only show formulae
        #[arg(long, conflicts_with = "casks")]
        formulae: bool,

        /// Only show casks
        #[arg(long)]
        casks: bool,
    },

    /// Start a service
    Start {
        /// Formula name to start
        formula: String,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stop a service
    Stop {
        /// Formula name to stop
        formula: String,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", style("error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Build the runner configuration from command-line flags.
fn runner_config(cli: &Cli) -> Result<RunnerConfig, bb_core::Error> {
    let locator = match &cli.brew {
        Some(path) if !path.is_file() => {
            return Err(bb_core::Error::BrewNotFound {
                tried: vec![path.display().to_string()],
            });
        }
        Some(path) => {
            log::debug!("using brew from --brew: {}", path.display());
            BrewLocator::explicit(path)
        }
        None => BrewLocator::default(),
    };

    Ok(RunnerConfig {
        locator,
        timeout: Duration::from_secs(cli.timeout),
        ..RunnerConfig::default()
    })
}

/// Which classes `status` should show.
fn selected_classes(formulae: bool, casks: bool) -> Vec<PackageClass> {
    match (formulae, casks) {
        (true, false) => vec![PackageClass::Formula],
        (false, true) => vec![PackageClass::Cask],
        _ => vec![PackageClass::Formula, PackageClass::Cask],
    }
}

async fn run(cli: Cli) -> Result<(), bb_core::Error> {
    let board = Brewboard::with_config(runner_config(&cli)?);

    match cli.command {
        None => commands::status::run(&board, false, &selected_classes(false, false)).await,

        Some(Commands::Status {
            json,
            formulae,
            casks,
        }) => commands::status::run(&board, json, &selected_classes(formulae, casks)).await,

        Some(Commands::Start { formula, json }) => {
            commands::control::run_start(&board, &formula, json).await
        }

        Some(Commands::Stop { formula, json }) => {
            commands::control::run_stop(&board, &formula, json).await
        }
    }
}
