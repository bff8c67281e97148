// src/core/ignore/loader.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::ignore::patterns::has_path_separator;

pub const IGNORE_FILE_NAME: &str = ".pyinitgenignore";

/// Loads directory names from the `.pyinitgenignore` file in `dir`.
///
/// One name per line. Surrounding whitespace is stripped, and blank lines and
/// lines starting with `#` are skipped. Everything else is kept verbatim.
///
/// A missing file yields an empty set. An unreadable file is logged and also
/// yields an empty set, so the scan can go ahead without it.
#[inline]
#[must_use]
pub fn load_ignore_patterns(dir: &Path) -> HashSet<String> {
    let ignore_file = dir.join(IGNORE_FILE_NAME);
    if !ignore_file.is_file() {
        return HashSet::new();
    }

    let content = match fs::read_to_string(&ignore_file) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}, ignoring it: {e}", ignore_file.display());
            return HashSet::new();
        }
    };

    let patterns = parse_ignore_patterns(&content);
    for pattern in patterns.iter().filter(|p| has_path_separator(p)) {
        warn!("Ignore pattern '{pattern}' contains a path separator; only directory names are matched");
    }
    debug!(
        path = %ignore_file.display(),
        count = patterns.len(),
        "Loaded ignore patterns"
    );
    patterns
}

/// Parses the contents of an ignore file.
#[inline]
#[must_use]
pub fn parse_ignore_patterns(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}
