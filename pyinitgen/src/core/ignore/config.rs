// src/core/ignore/config.rs
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Recognised project configuration files, in lookup order.
/// Only the first one that exists is read.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".pyinitgen.toml", "pyproject.toml"];

#[derive(Deserialize, Debug, Default)]
struct ProjectConfig {
    tool: Option<ToolTable>,
}

#[derive(Deserialize, Debug, Default)]
struct ToolTable {
    pyinitgen: Option<PyinitgenTable>,
}

#[derive(Deserialize, Debug, Default)]
struct PyinitgenTable {
    exclude_dirs: Option<Vec<String>>,
}

/// Returns the configuration file that would be consulted for `dir`, if any.
#[inline]
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Loads `tool.pyinitgen.exclude_dirs` from the project configuration in `dir`.
///
/// Never fails: a missing file, section or key, an unreadable file, or
/// invalid TOML all produce an empty set.
#[inline]
#[must_use]
pub fn load_config_patterns(dir: &Path) -> HashSet<String> {
    let Some(config_file) = find_config_file(dir) else {
        return HashSet::new();
    };

    let content = match fs::read_to_string(&config_file) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}, ignoring it: {e}", config_file.display());
            return HashSet::new();
        }
    };

    match parse_config_patterns(&content) {
        Ok(patterns) => {
            debug!(
                path = %config_file.display(),
                count = patterns.len(),
                "Loaded exclude_dirs from project configuration"
            );
            patterns
        }
        Err(e) => {
            warn!("Failed to parse {}, ignoring it: {e}", config_file.display());
            HashSet::new()
        }
    }
}

/// Extracts `tool.pyinitgen.exclude_dirs` from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or the key holds something
/// other than an array of strings.
#[inline]
pub fn parse_config_patterns(content: &str) -> Result<HashSet<String>, toml::de::Error> {
    let config: ProjectConfig = toml::from_str(content)?;
    Ok(config
        .tool
        .and_then(|tool| tool.pyinitgen)
        .and_then(|section| section.exclude_dirs)
        .unwrap_or_default()
        .into_iter()
        .collect())
}
