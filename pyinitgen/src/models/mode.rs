// src/models/mode.rs

/// What the reconciler does when a directory is missing its `__init__.py`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create the marker. The first failed write aborts the scan.
    #[default]
    Write,
    /// Report what would be created without touching the filesystem.
    DryRun,
    /// Report missing markers and fail the run, but keep scanning.
    Check,
}

impl Mode {
    /// Builds a mode from the two mutually exclusive CLI switches.
    /// `check` wins if both are set.
    #[inline]
    #[must_use]
    pub const fn from_flags(dry_run: bool, check: bool) -> Self {
        if check {
            Self::Check
        } else if dry_run {
            Self::DryRun
        } else {
            Self::Write
        }
    }
}
