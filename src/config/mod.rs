//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (POLICY_EXPORT_*)
//! 3. Config file (`--config` or `.policy-export.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_overrides_from, ConfigWarning,
    ENV_PREFIX,
};
pub use types::{
    Config, ExportConfig, OutputConfig, StagingConfig, Verbosity, CONFIG_FILE_NAME,
};
