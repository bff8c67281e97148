// src/models/scan_result.rs

/// Outcome of one reconciliation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    /// 0 on success, 1 if a write failed or a check found a missing marker.
    pub status: u8,
    pub created: u64,
    pub scanned_dirs: u64,
}

impl ScanResult {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: 0,
            created: 0,
            scanned_dirs: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 0
    }

    #[inline]
    pub const fn mark_failed(&mut self) {
        self.status = 1;
    }
}
