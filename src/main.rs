//! policy-export CLI
//!
//! Usage: policy-export [OPTIONS] [LOCK_PATH] <DESTINATION>

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use policy_export::Verbosity;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let working_dir = std::env::current_dir().context("cannot determine working directory")?;

    let (config, warnings) = commands::export::load_config(&cli, &working_dir)?;
    init_tracing(commands::export::verbosity(&cli, &config));
    commands::export::report_warnings(warnings);

    commands::export::cmd_export(&cli, &config)
}

/// Logs go to stderr so stdout stays clean for results and JSON events.
/// `RUST_LOG` overrides the level derived from flags and configuration.
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
