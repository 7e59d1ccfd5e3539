//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for dcim-sync.
#[derive(Debug, Parser)]
#[command(
    name = "dcim-sync",
    about = "Copy new numbered media from a camera-style tree to an archive tree",
    version
)]
pub struct Args {
    /// Source tree (e.g. a mounted card's DCIM directory).
    #[arg(index = 1)]
    pub source: PathBuf,

    /// Destination tree to bring up to the source's newest content.
    #[arg(index = 2)]
    pub destination: PathBuf,

    /// Plan only; report what would be copied without writing anything.
    #[arg(long = "dry-run", short = 'n')]
    pub dry_run: bool,

    /// Force destination names to lowercase.
    #[arg(long, conflicts_with = "upper")]
    pub lower: bool,

    /// Force destination names to uppercase.
    #[arg(long)]
    pub upper: bool,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Increase diagnostic detail (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }

    /// Log level implied by the verbosity counter, if any.
    #[must_use]
    pub const fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
