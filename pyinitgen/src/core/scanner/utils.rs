// src/core/scanner/utils.rs
use crate::core::ignore::ExclusionSet;

/// Determines if a walk entry is an excluded subdirectory whose whole subtree
/// must be skipped.
///
/// The scan root is never pruned, whatever its name. Only directories are
/// pruned; files and symlinks are left to the caller.
#[inline]
#[must_use]
pub fn should_prune(entry: &walkdir::DirEntry, exclusions: &ExclusionSet) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && exclusions.matches(entry.file_name())
}
