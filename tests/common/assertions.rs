//! Assertion helpers for contract and scenario tests.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// List all files below `dir`, relative and sorted (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(dir)
                .ok()
                .map(|p| p.display().to_string())
        })
        .collect()
}

/// Every path below `dir` with file content, for before/after comparison
pub fn snapshot_tree(dir: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| {
            let content = e
                .file_type()
                .is_file()
                .then(|| std::fs::read(e.path()).expect("readable file"));
            (e.path().to_path_buf(), content)
        })
        .collect()
}

/// Assert that a path exists below the export destination.
///
/// # Example
/// ```ignore
/// assert_exported!(env, "cookbooks/app-1.2.0/recipes/default.rb");
/// ```
#[macro_export]
macro_rules! assert_exported {
    ($env:expr, $path:expr) => {
        let full_path = $env.destination().join($path);
        assert!(
            full_path.exists(),
            "Expected '{}' in export, but it doesn't exist.\n\
             Files found:\n  {}",
            $path,
            $crate::common::list_all_files(&$env.destination()).join("\n  ")
        );
    };
}

/// Assert that a path does NOT exist below the export destination.
#[macro_export]
macro_rules! assert_not_exported {
    ($env:expr, $path:expr) => {
        let full_path = $env.destination().join($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT be exported, but it is.",
            $path
        );
    };
}
