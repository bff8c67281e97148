// src/core/scanner/test_utils.rs
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::core::scanner::INIT_FILE_NAME;

pub fn create_dirs(dir: &TempDir, names: &[&str]) -> Result<()> {
    for name in names {
        fs::create_dir_all(dir.path().join(name))?;
    }
    Ok(())
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

pub fn init_file(dir: &TempDir, relative_dir: &str) -> PathBuf {
    dir.path().join(relative_dir).join(INIT_FILE_NAME)
}

/// `root/{package_a/{subpackage_a/}, package_b/{subpackage_b/}}` plus a set of
/// directories covered by the built-in exclusions.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_dirs(
        &dir,
        &[
            "package_a/subpackage_a",
            "package_b/subpackage_b",
            ".git/objects",
            "__pycache__",
            "node_modules/left-pad",
            "docs",
            "venv/lib",
            "data",
            "assets",
        ],
    )?;
    create_test_file(&dir, "package_a/module.py", "VALUE = 1\n")?;

    Ok(dir)
}
