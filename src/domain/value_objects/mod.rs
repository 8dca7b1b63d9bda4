//! Value objects - immutable, validated domain types

mod ignore_patterns;
mod version;

pub use ignore_patterns::{IgnoreError, IgnorePatterns, IGNORE_FILE_NAME};
pub use version::{ResolvedVersion, VersionError};
