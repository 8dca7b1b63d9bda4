//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name of the project-level configuration file
pub const CONFIG_FILE_NAME: &str = ".policy-export.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub staging: StagingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Default export behavior (CLI flags take precedence)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Produce a single archive instead of a directory tree
    #[serde(default)]
    pub archive: bool,

    /// Replace existing destination content
    #[serde(default)]
    pub force: bool,
}

/// Where staging areas are created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Parent directory for staging areas (defaults to the system temp dir)
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl StagingConfig {
    /// The configured root, or the system temp dir
    pub fn root_or_default(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, falling back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Raise the level by the number of `-v` flags given
    pub fn raised_by(self, count: u8) -> Self {
        let level = match self {
            Verbosity::Quiet => 0u8,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        };
        match level.saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "warn,policy_export=info",
            Verbosity::Debug => "info,policy_export=debug",
        }
    }
}
