//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;
use dcim_sync_index::HighWaterMark;

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{} {}\n", "📷", message.bold());
}

/// Print one side of the sync (source or destination).
pub fn print_tree_info(label: &str, path: &Path, mark: Option<HighWaterMark>) {
    let mark = mark.map_or_else(|| "no numbered media".to_string(), |m| format!("newest {m}"));
    println!(
        "{:>12}: {} ({})",
        label,
        path.display().to_string().cyan(),
        mark.dimmed()
    );
}

/// Print the planned copy tasks.
pub fn print_plan(tasks: &[(String, String, u64)], total_files: u64) {
    println!(
        "Planned {} task{} ({} file{}):",
        tasks.len(),
        if tasks.len() == 1 { "" } else { "s" },
        total_files,
        if total_files == 1 { "" } else { "s" }
    );
    for (dir, range, files) in tasks {
        println!(
            "  {} {} {} ({} files)",
            "•".dimmed(),
            dir.yellow(),
            range,
            files
        );
    }
    println!();
}

/// Print the already-in-sync message.
pub fn print_in_sync() {
    println!("Destination is already up to date. Nothing to copy.");
}

/// Print the final summary.
pub fn print_summary(copied: u64, already_present: u64) {
    println!(
        "{} Sync complete! {copied} copied, {already_present} already present.",
        "✅"
    );
}

/// Print the dry-run summary.
pub fn print_dry_run_summary(would_copy: u64, already_present: u64) {
    println!(
        "Dry run: {would_copy} file{} would be copied, {already_present} already present.",
        if would_copy == 1 { "" } else { "s" }
    );
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
