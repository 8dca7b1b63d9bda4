//! Export command

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use policy_export::config::{load_or_default, Config, ConfigWarning};
use policy_export::presentation::{create_export_use_case, create_renderer, OutputFormat};
use policy_export::{ExportRequest, Verbosity};
use tracing::{debug, warn};

use crate::cli::Cli;

/// Load configuration from `--config` or the working directory
pub fn load_config(cli: &Cli, working_dir: &Path) -> Result<(Config, Vec<ConfigWarning>)> {
    Ok(load_or_default(cli.config.as_deref(), working_dir)?)
}

/// Log unknown configuration keys; needs tracing to be initialized
pub fn report_warnings(warnings: Vec<ConfigWarning>) {
    for ConfigWarning { key, file, line } in warnings {
        match line {
            Some(line) => warn!(%key, file = %file.display(), line, "unknown configuration key"),
            None => warn!(%key, file = %file.display(), "unknown configuration key"),
        }
    }
}

/// Effective verbosity: `--quiet` wins, each `-v` raises the configured level
pub fn verbosity(cli: &Cli, config: &Config) -> Verbosity {
    if cli.quiet {
        Verbosity::Quiet
    } else {
        config.output.verbosity.raised_by(cli.verbose)
    }
}

pub fn cmd_export(cli: &Cli, config: &Config) -> Result<()> {
    let (lock_input, destination) = cli.paths();
    let mut request = ExportRequest::new(&lock_input, destination).with_config(config);
    if let Some(archive) = cli.archive() {
        request = request.with_archive(archive);
    }
    if let Some(force) = cli.force() {
        request = request.with_force(force);
    }
    debug!(?request, "export request");

    let format = OutputFormat::from_flags(cli.json, cli.quiet);
    let mut use_case = create_export_use_case(request, format);
    let outcome = use_case
        .run()
        .with_context(|| format!("export of {} failed", use_case.lock_path().display()))?;

    let renderer = create_renderer(format, supports_unicode(), cli.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.render(&outcome, &mut out)?;
    out.flush()?;
    Ok(())
}

fn supports_unicode() -> bool {
    !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
}
