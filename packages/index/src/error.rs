//! Error types for tree scanning.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a tree into an index.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Failed to list a directory.
    ///
    /// An unreadable root or subdirectory aborts the whole scan; there is no
    /// partial-scan fallback.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// The directory that couldn't be listed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
