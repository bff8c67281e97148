// src/core/ignore/defaults.rs
use std::collections::HashSet;
use std::sync::LazyLock;

/// Directory names that are never treated as part of a package tree.
pub const DEFAULT_EXCLUDE_DIR_NAMES: [&str; 31] = [
    // VCS
    ".git",
    ".hg",
    ".svn",
    // Python caches and tools
    "__pycache__",
    ".venv",
    "venv",
    "env",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    // JS
    "node_modules",
    // IDE / OS
    ".vscode",
    ".idea",
    ".DS_Store",
    // Build / dist
    "build",
    "dist",
    "eggs",
    ".egg-info",
    // Docs
    "docs",
    "site",
    ".github",
    // Test and packaging artifacts
    "htmlcov",
    ".tox",
    ".nox",
    "pip-wheel-metadata",
    // Temporary and data directories
    "tmp",
    "temp",
    "data",
    "assets",
    "static",
    "media",
];

pub static DEFAULT_EXCLUDE_DIRS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_EXCLUDE_DIR_NAMES.into_iter().collect());
