//! Resolved version value object
//!
//! A lock only ever pins concrete dotted-decimal versions. Constraint
//! expressions (`~> 1.0`, `>= 2`) are rejected at construction.

use std::fmt;
use std::str::FromStr;

/// A concrete, dot-separated decimal version such as `1.2.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolvedVersion(String);

impl ResolvedVersion {
    /// Parse a version, rejecting anything that is not concrete
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        if raw.is_empty() {
            return Err(VersionError::Empty);
        }

        let concrete = raw
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));

        if concrete {
            Ok(Self(raw.to_string()))
        } else {
            Err(VersionError::NotConcrete(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResolvedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Why a version string is not a resolved version
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("version is empty")]
    Empty,
    #[error("version '{0}' is not a concrete dotted-decimal version")]
    NotConcrete(String),
}
