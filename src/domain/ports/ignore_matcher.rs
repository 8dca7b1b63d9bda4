//! IgnoreMatcher port - decides whether a package entry is excluded
//!
//! Pattern syntax is owned by the implementation; the package filter only
//! asks yes/no questions about top-level entry names.

/// Capability to match entry base names against exclusion rules
pub trait IgnoreMatcher {
    /// Whether the entry named `name` at the package root is excluded
    fn matches(&self, name: &str, is_dir: bool) -> bool;
}

impl<F> IgnoreMatcher for F
where
    F: Fn(&str, bool) -> bool,
{
    fn matches(&self, name: &str, is_dir: bool) -> bool {
        self(name, is_dir)
    }
}
