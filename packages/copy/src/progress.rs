//! Progress snapshots for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Progress information for one copy task.
///
/// The tool is single-threaded, so this is a plain value handed to the
/// progress callback after every file.
#[derive(Debug, Clone)]
pub struct CopyProgress {
    /// Total number of files in the task.
    pub files_total: u64,
    /// Number of files handled so far (copied or skipped).
    pub files_done: u64,
    /// Destination name of the file just handled (if any).
    pub current_file: Option<String>,
}

impl CopyProgress {
    /// Create a new progress snapshot.
    #[must_use]
    pub const fn new(files_total: u64, files_done: u64, current_file: Option<String>) -> Self {
        Self {
            files_total,
            files_done,
            current_file,
        }
    }

    /// Calculate progress as a percentage (0.0 to 100.0).
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.files_total == 0 {
            100.0
        } else {
            (self.files_done as f64 / self.files_total as f64) * 100.0
        }
    }
}
