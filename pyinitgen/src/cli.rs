// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::core::scanner::create_inits;
use crate::models::{Mode, ScanOptions, ScanResult};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Ensure all directories have __init__.py files.",
    long_about = None
)]
pub struct Args {
    /// Base directory to scan (default: current dir)
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Preview changes without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Report directories missing __init__.py and exit non-zero if any are found
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Suppress non-error logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Show scanned directories
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable emoji in output
    #[arg(long)]
    pub no_emoji: bool,

    /// Content to write to new __init__.py files (default: empty file)
    #[arg(long, default_value = "")]
    pub init_content: String,
}

impl Args {
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::from_flags(self.dry_run, self.check)
    }

    #[inline]
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            mode: self.mode(),
            verbose: self.verbose,
            use_emoji: !self.no_emoji,
            init_content: self.init_content.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}

/// Resolves the base directory and runs one scan with the options from `args`.
///
/// # Errors
///
/// Returns an error if the base directory does not exist or is not a
/// directory. Problems during the scan itself are reported through the
/// returned status, not as an error.
#[inline]
pub fn run(args: &Args) -> Result<ScanResult> {
    let base_dir = args
        .base_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve base directory: {}", args.base_dir.display()))?;
    if !base_dir.is_dir() {
        bail!("Base directory is not a directory: {}", base_dir.display());
    }

    Ok(create_inits(&base_dir, &args.scan_options()))
}
