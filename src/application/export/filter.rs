//! Package filtering
//!
//! Decides which top-level entries of a cookbook source get exported. Rules
//! come from the cookbook's `chefignore` and apply to entry base names at
//! the cookbook root only; included directories are copied whole.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::IgnoreMatcher;
use crate::domain::value_objects::{IgnoreError, IgnorePatterns};

/// Failure while listing a package
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error(transparent)]
    Ignore(#[from] IgnoreError),
    #[error("failed to list package directory: {0}")]
    Io(#[from] io::Error),
}

/// Selects the entries of a package source to export
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageFilter;

impl PackageFilter {
    pub fn new() -> Self {
        Self
    }

    /// Entries of `package_dir` to copy, honoring its ignore file
    pub fn filter(&self, package_dir: &Path) -> Result<Vec<PathBuf>, FilterError> {
        let patterns = IgnorePatterns::load(package_dir)?;
        Ok(self.filter_with(package_dir, &patterns)?)
    }

    /// Entries of `package_dir` to copy, using an explicit matcher
    pub fn filter_with<M: IgnoreMatcher + ?Sized>(
        &self,
        package_dir: &Path,
        matcher: &M,
    ) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(package_dir)? {
            let entry = entry?;
            let is_dir = entry.path().is_dir();
            entries.push((entry.file_name(), is_dir));
        }

        Ok(self
            .select(entries, matcher)
            .into_iter()
            .map(|name| package_dir.join(name))
            .collect())
    }

    /// Names that survive the matcher, sorted for a deterministic copy order.
    ///
    /// The matcher sees a lossy UTF-8 rendering of each name; the returned
    /// names are the originals.
    pub fn select<M: IgnoreMatcher + ?Sized>(
        &self,
        entries: impl IntoIterator<Item = (OsString, bool)>,
        matcher: &M,
    ) -> Vec<OsString> {
        let mut selected: Vec<OsString> = entries
            .into_iter()
            .filter(|(name, is_dir)| !matcher.matches(&name.to_string_lossy(), *is_dir))
            .map(|(name, _)| name)
            .collect();
        selected.sort();
        selected
    }
}
