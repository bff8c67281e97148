// src/models/scan_options.rs
use crate::models::Mode;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub mode: Mode,
    /// Emit a debug event for every visited directory.
    pub verbose: bool,
    pub use_emoji: bool,
    /// Written verbatim into every newly created `__init__.py`.
    pub init_content: String,
}

impl Default for ScanOptions {
    #[inline]
    fn default() -> Self {
        Self {
            mode: Mode::Write,
            verbose: false,
            use_emoji: true,
            init_content: String::new(),
        }
    }
}

impl ScanOptions {
    #[inline]
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
