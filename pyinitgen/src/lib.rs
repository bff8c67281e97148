//! Keeps a Python source tree importable by making sure every package
//! directory carries an `__init__.py`.
//!
//! The scan starts at a base directory and walks it top-down. Directories
//! named in the built-in exclusion list, in `.pyinitgenignore`, or in
//! `tool.pyinitgen.exclude_dirs` of `.pyinitgen.toml` / `pyproject.toml` are
//! skipped along with everything below them.
//!
//! ```rust,no_run
//! use pyinitgen::{Mode, ScanOptions, create_inits};
//! use std::path::Path;
//!
//! let result = create_inits(Path::new("src"), &ScanOptions::with_mode(Mode::Check));
//! if !result.is_success() {
//!     eprintln!("some packages are missing __init__.py");
//! }
//! ```
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;

pub use crate::cli::{Args, run};
pub use crate::core::ignore::{
    CONFIG_FILE_NAMES, DEFAULT_EXCLUDE_DIRS, ExclusionSet, IGNORE_FILE_NAME, load_config_patterns,
    load_ignore_patterns, resolve_exclusions, resolve_exclusions_with,
};
pub use crate::core::scanner::{INIT_FILE_NAME, create_inits, create_inits_with_exclusions};
pub use crate::models::{Mode, ScanOptions, ScanResult};
