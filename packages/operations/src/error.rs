//! Error types for planning and execution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while planning a sync.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The source tree has no numbered directory with recognized content.
    #[error(
        "No numbered media found under {}: expected camera-style directories \
         like 100CANON containing files like IMG_0001.JPG",
        root.display()
    )]
    NoSourceData {
        /// The scanned source root.
        root: PathBuf,
    },
}

/// Errors that can occur while executing a copy task.
#[derive(Debug, Error)]
pub enum OperationError {
    /// A filesystem operation failed.
    #[error(transparent)]
    Copy(#[from] dcim_sync_copy::CopyError),
}
