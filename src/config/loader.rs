//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportResult};

use super::types::{Config, Verbosity, CONFIG_FILE_NAME};

/// Prefix of environment variables that override configuration
pub const ENV_PREFIX: &str = "POLICY_EXPORT_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl Config {
    /// Load a configuration file, failing on unknown syntax
    pub fn load(path: &Path) -> ExportResult<Self> {
        load_with_warnings(path).map(|(config, _)| config)
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ExportResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ExportError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ExportError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config file, or `.policy-export.toml` in `working_dir`
/// if present, or defaults. Environment overrides are applied last.
pub fn load_or_default(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> ExportResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let project_config = working_dir.join(CONFIG_FILE_NAME);
            if project_config.is_file() {
                load_with_warnings(&project_config)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (POLICY_EXPORT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

    if let Some(val) = var("ARCHIVE") {
        config.export.archive = parse_flag(&val);
    }

    if let Some(val) = var("FORCE") {
        config.export.force = parse_flag(&val);
    }

    if let Some(root) = var("STAGING_ROOT").filter(|r| !r.is_empty()) {
        config.staging.root = Some(PathBuf::from(root));
    }

    if let Some(verbosity) = var("VERBOSITY") {
        config.output.verbosity = Verbosity::from_name(&verbosity);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
