//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Progress bar manager for copy tasks.
pub struct ProgressManager {
    multi: MultiProgress,
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            enabled,
        }
    }

    /// Create a progress bar for one copy task.
    ///
    /// Returns a `ProgressBar` that shows file count progress.
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_file_bar(&self, label: &str, total: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = self.multi.add(ProgressBar::new(total));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {prefix:<30} [{bar:25.green/dim}] {pos}/{len} files")
                .expect("Invalid progress bar template")
                .progress_chars("━━─"),
        );
        pb.set_prefix(label.to_string());
        pb
    }

    /// Print a completed operation result line.
    ///
    /// Shows a checkmark for an action taken, bullet for skipped.
    pub fn print_result(&self, label: &str, result: &str, is_action: bool) {
        if is_action {
            println!("{} {:<30} {}", "✓".green(), label, result.dimmed());
        } else {
            println!("{} {:<30} {}", "•".dimmed(), label, result.dimmed());
        }
        // Flush to ensure output appears immediately
        let _ = std::io::stdout().flush();
    }

    /// Print a result with file count for a whole task.
    pub fn print_result_with_count(&self, label: &str, result: &str, file_count: u64) {
        println!(
            "{} {:<30} {} ({} files)",
            "✓".green(),
            label,
            result.dimmed(),
            file_count
        );
        let _ = std::io::stdout().flush();
    }

    /// Clear any active progress bars (for clean output after completion).
    pub fn clear(&self) {
        self.multi.clear().ok();
    }
}
