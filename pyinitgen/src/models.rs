// src/models.rs
pub mod mode;
pub mod scan_options;
pub mod scan_result;

pub use mode::Mode;
pub use scan_options::ScanOptions;
pub use scan_result::ScanResult;
