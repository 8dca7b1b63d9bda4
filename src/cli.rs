//! CLI Argument Parsing
//!
//! `policy-export [LOCK_PATH] DESTINATION`. With a single positional the
//! lock defaults to `Policyfile.lock.json` in the working directory.

use std::path::PathBuf;

use clap::Parser;
use policy_export::domain::services::LOCK_FILE_NAME;

/// Export a policy lock and its cookbooks for use without a server
#[derive(Parser, Debug)]
#[command(name = "policy-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Lock file, policy file, or directory holding `Policyfile.lock.json`
    #[arg(value_name = "LOCK_PATH")]
    first: PathBuf,

    /// Directory to export into
    #[arg(value_name = "DESTINATION")]
    second: Option<PathBuf>,

    /// Write a single `<name>-<revision>.tgz` archive instead of a directory tree
    #[arg(short, long, overrides_with = "no_archive")]
    archive: bool,

    /// Export a directory tree even if configuration enables archives
    #[arg(long, overrides_with = "archive")]
    no_archive: bool,

    /// Replace existing exported content in the destination
    #[arg(short, long, overrides_with = "no_force")]
    force: bool,

    /// Refuse to replace existing content even if configuration allows it
    #[arg(long, overrides_with = "force")]
    no_force: bool,

    /// Configuration file (default: `.policy-export.toml` in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Stream NDJSON events to stdout
    #[arg(long)]
    pub json: bool,

    /// Print only the exported path
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// `Some` when `--archive` or `--no-archive` was given; the last one wins
    pub fn archive(&self) -> Option<bool> {
        flag_pair(self.archive, self.no_archive)
    }

    /// `Some` when `--force` or `--no-force` was given; the last one wins
    pub fn force(&self) -> Option<bool> {
        flag_pair(self.force, self.no_force)
    }

    /// `(lock_path, destination)` after applying the lock default
    pub fn paths(&self) -> (PathBuf, PathBuf) {
        match &self.second {
            Some(destination) => (self.first.clone(), destination.clone()),
            None => (PathBuf::from(LOCK_FILE_NAME), self.first.clone()),
        }
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
