// src/core/scanner.rs
pub mod marker;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

use std::path::Path;

use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::core::ignore::{ExclusionSet, resolve_exclusions};
use crate::models::{Mode, ScanOptions, ScanResult};

pub use marker::{INIT_FILE_NAME, has_init_file, write_init_file};
pub use utils::should_prune;

/// Walks `base_dir` and makes sure every directory that is not excluded has an
/// `__init__.py`.
///
/// Exclusions are resolved once from `base_dir` before the walk starts. See
/// [`create_inits_with_exclusions`] for the per-directory behaviour.
///
/// # Arguments
///
/// * `base_dir` - The directory to scan. It must exist.
/// * `options` - Mode, verbosity and the content for new files
#[inline]
#[must_use]
pub fn create_inits(base_dir: &Path, options: &ScanOptions) -> ScanResult {
    let exclusions = resolve_exclusions(base_dir);
    create_inits_with_exclusions(base_dir, options, &exclusions)
}

/// Walks `base_dir` top-down, skipping every subdirectory whose name is in
/// `exclusions` together with everything below it.
///
/// For each visited directory without an `__init__.py`:
/// * [`Mode::Write`] creates it. The first failure is logged and ends the walk
///   with status 1.
/// * [`Mode::DryRun`] logs what would be created.
/// * [`Mode::Check`] logs the missing file, sets status 1 and keeps going.
///
/// Existing `__init__.py` files are never touched. A directory that cannot be
/// listed is logged and skipped without being counted or changing the status.
/// I/O errors never escape; they are reported through logging and the
/// returned status.
#[inline]
#[must_use]
pub fn create_inits_with_exclusions(
    base_dir: &Path,
    options: &ScanOptions,
    exclusions: &ExclusionSet,
) -> ScanResult {
    let mut result = ScanResult::new();
    let mut missing: u64 = 0;

    let walker = WalkDir::new(base_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_prune(e, exclusions));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        let present = match has_init_file(dir) {
            Ok(present) => present,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {e}", dir.display());
                continue;
            }
        };

        result.scanned_dirs = result.scanned_dirs.saturating_add(1);
        if options.verbose {
            debug!("Scanning: {}", dir.display());
        }
        if present {
            continue;
        }

        let init_file = dir.join(INIT_FILE_NAME);
        match options.mode {
            Mode::Write => {
                if let Err(e) = write_init_file(&init_file, &options.init_content) {
                    error!("Failed to create {}: {e}", init_file.display());
                    result.mark_failed();
                    return result;
                }
                info!("Created {}", init_file.display());
                result.created = result.created.saturating_add(1);
            }
            Mode::DryRun => {
                info!("[DRY-RUN] Would create {}", init_file.display());
            }
            Mode::Check => {
                info!("[CHECK] Missing {}", init_file.display());
                missing = missing.saturating_add(1);
                result.mark_failed();
            }
        }
    }

    log_summary(options, &result, missing);
    result
}

fn log_summary(options: &ScanOptions, result: &ScanResult, missing: u64) {
    match options.mode {
        Mode::Write => {
            let checkmark = if options.use_emoji { "✅ " } else { "" };
            info!(
                "{checkmark}Operation complete. Scanned {} dirs, created {} new {INIT_FILE_NAME} files.",
                result.scanned_dirs, result.created
            );
        }
        Mode::DryRun => info!("Dry-run complete. No files created."),
        Mode::Check if missing == 0 => info!(
            "Check passed: all {} scanned dirs contain {INIT_FILE_NAME}.",
            result.scanned_dirs
        ),
        Mode::Check => warn!(
            "Check failed: {missing} of {} scanned dirs are missing {INIT_FILE_NAME}.",
            result.scanned_dirs
        ),
    }
}
