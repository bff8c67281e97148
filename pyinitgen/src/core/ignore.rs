// src/core/ignore.rs
pub mod config;
pub mod defaults;
pub mod loader;
pub mod patterns;

use std::path::Path;

use tracing::debug;

pub use config::{CONFIG_FILE_NAMES, load_config_patterns};
pub use defaults::DEFAULT_EXCLUDE_DIRS;
pub use loader::{IGNORE_FILE_NAME, load_ignore_patterns};
pub use patterns::ExclusionSet;

/// Computes the effective exclusions for a scan rooted at `base_dir`:
/// the built-in names, plus `.pyinitgenignore`, plus
/// `tool.pyinitgen.exclude_dirs` from the project configuration.
///
/// Missing or broken sources contribute nothing; this never fails.
#[inline]
#[must_use]
pub fn resolve_exclusions(base_dir: &Path) -> ExclusionSet {
    resolve_exclusions_with(base_dir, ExclusionSet::defaults())
}

/// Same as [`resolve_exclusions`] but starting from a caller-supplied base
/// set instead of the built-in one.
#[inline]
#[must_use]
pub fn resolve_exclusions_with(base_dir: &Path, base: ExclusionSet) -> ExclusionSet {
    let mut exclusions = base;
    exclusions.extend(load_ignore_patterns(base_dir));
    exclusions.extend(load_config_patterns(base_dir));

    debug!(count = exclusions.len(), "Resolved excluded directory names");
    exclusions
}
