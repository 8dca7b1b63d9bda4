//! Ignore patterns value object
//!
//! Loads a package's `chefignore` file and matches top-level entry names
//! against it using glob semantics.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::IgnoreMatcher;

/// Name of the ignore file looked up at a package root
pub const IGNORE_FILE_NAME: &str = "chefignore";

/// Maximum file size for an ignore file (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Patterns loaded from a package's ignore file.
///
/// Uses the `ignore` crate for glob matching.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Load patterns from the ignore file in the given package directory.
    ///
    /// Returns `Ok(empty)` if the file doesn't exist.
    pub fn load(package_dir: &Path) -> Result<Self, IgnoreError> {
        let ignore_path = package_dir.join(IGNORE_FILE_NAME);

        if !ignore_path.is_file() {
            return Ok(Self::empty());
        }

        let metadata = fs::metadata(&ignore_path).map_err(IgnoreError::Io)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(IgnoreError::FileTooLarge {
                path: ignore_path,
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let content = fs::read_to_string(&ignore_path).map_err(IgnoreError::Io)?;
        Self::from_content(package_dir, &ignore_path, &content)
    }

    /// Parse patterns from string content.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    path: source_path.to_path_buf(),
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), trimmed) {
                return Err(IgnoreError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: trimmed.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

impl IgnoreMatcher for IgnorePatterns {
    fn matches(&self, name: &str, is_dir: bool) -> bool {
        self.matcher.matched(Path::new(name), is_dir).is_ignore()
    }
}

/// Errors that can occur when loading ignore patterns.
#[derive(Debug)]
pub enum IgnoreError {
    /// The ignore file exceeds the size limit.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },
    /// Too many patterns in the file.
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },
    /// A pattern has invalid syntax.
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the matcher.
    BuildFailed(String),
    /// IO error reading the file.
    Io(std::io::Error),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileTooLarge { path, size, limit } => {
                write!(
                    f,
                    "{} exceeds {}KB limit ({} bytes): {}",
                    IGNORE_FILE_NAME,
                    limit / 1024,
                    size,
                    path.display()
                )
            }
            Self::TooManyPatterns { path, count, limit } => {
                write!(
                    f,
                    "{} has {} patterns, exceeds {} limit: {}",
                    IGNORE_FILE_NAME,
                    count,
                    limit,
                    path.display()
                )
            }
            Self::InvalidPattern {
                path,
                line,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "Invalid pattern at {}:{}: '{}' - {}",
                    path.display(),
                    line,
                    pattern,
                    message
                )
            }
            Self::BuildFailed(msg) => write!(f, "Failed to build ignore matcher: {}", msg),
            Self::Io(e) => write!(f, "IO error reading {}: {}", IGNORE_FILE_NAME, e),
        }
    }
}

impl std::error::Error for IgnoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
