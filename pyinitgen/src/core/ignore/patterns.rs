// src/core/ignore/patterns.rs
use std::collections::HashSet;
use std::path::{Path, MAIN_SEPARATOR};

use crate::core::ignore::defaults::DEFAULT_EXCLUDE_DIRS;

/// Directory basenames that prune a subtree from the scan.
///
/// Matching is exact and case-sensitive against the final path component.
/// Names are stored verbatim, so an entry such as `dir2/subdir` is kept but
/// can never match a basename.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// The built-in exclusions only.
    #[inline]
    #[must_use]
    pub fn defaults() -> Self {
        DEFAULT_EXCLUDE_DIRS
            .iter()
            .map(|name| (*name).to_owned())
            .collect()
    }

    #[inline]
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns `true` when the last component of `path` is an excluded name.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.contains(name))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Whether a pattern contains a path separator and so can never match a basename.
#[inline]
#[must_use]
pub fn has_path_separator(pattern: &str) -> bool {
    pattern.contains('/') || pattern.contains(MAIN_SEPARATOR)
}

impl FromIterator<String> for ExclusionSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for ExclusionSet {
    #[inline]
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}
