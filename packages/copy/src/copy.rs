//! Single-file copy with the already-synced skip rule.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::CopyError;

/// Result of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Bytes were copied to the target.
    Copied,
    /// Target already exists with non-zero size; treated as already synced.
    AlreadyPresent,
    /// Dry run: the copy would have happened.
    WouldCopy,
}

impl std::fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copied => write!(f, "copied"),
            Self::AlreadyPresent => write!(f, "exists"),
            Self::WouldCopy => write!(f, "would copy"),
        }
    }
}

/// Copy `source` to `target` unless the target is already synced.
///
/// A target that exists with non-zero size is skipped. A zero-byte target
/// (e.g. from an interrupted earlier run) is overwritten. With `dry_run`
/// set, nothing is written and the intended action is reported instead.
///
/// # Errors
///
/// * If target metadata can't be read
/// * If the copy itself fails
pub fn copy_if_missing(source: &Path, target: &Path, dry_run: bool) -> Result<CopyOutcome, CopyError> {
    if target_is_synced(target)? {
        log::debug!("Already present: {}", target.display());
        return Ok(CopyOutcome::AlreadyPresent);
    }

    if dry_run {
        log::debug!(
            "Would copy {} -> {}",
            source.display(),
            target.display()
        );
        return Ok(CopyOutcome::WouldCopy);
    }

    copy_file_with_reflink(source, target)?;
    Ok(CopyOutcome::Copied)
}

/// Create a directory (and any missing parents).
///
/// # Errors
///
/// * If creation fails
pub fn ensure_dir(path: &Path) -> Result<(), CopyError> {
    fs::create_dir_all(path).map_err(|e| CopyError::CreateDirError {
        path: path.to_path_buf(),
        io_error: e,
    })
}

/// Whether the target already holds content.
fn target_is_synced(target: &Path) -> Result<bool, CopyError> {
    if !target.exists() {
        return Ok(false);
    }

    let metadata = fs::metadata(target).map_err(|e| CopyError::MetadataError {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    Ok(metadata.len() > 0)
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    // Reflink fails on an existing target; a zero-byte leftover must go first.
    if target.exists() {
        fs::remove_file(target).map_err(|e| CopyError::FileCopyError {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
            io_error: e,
        })?;
    }

    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            // Fall back to regular copy
            fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}
