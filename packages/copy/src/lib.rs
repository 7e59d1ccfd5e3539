//! File copy primitives for dcim-sync.
//!
//! This crate owns the byte-level side of a sync run:
//!
//! * The already-synced rule: a destination file that exists with non-zero
//!   size is never touched; a missing or zero-byte one triggers a copy
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`) with a
//!   plain `fs::copy` fallback
//! * Destination directory creation
//! * A progress snapshot type for UI callbacks
//!
//! # Example
//!
//! ```rust,ignore
//! use dcim_sync_copy::{CopyOutcome, copy_if_missing};
//!
//! match copy_if_missing(&source, &target, false)? {
//!     CopyOutcome::Copied => println!("copied"),
//!     CopyOutcome::AlreadyPresent => println!("already synced"),
//!     CopyOutcome::WouldCopy => unreachable!("not a dry run"),
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod progress;

pub use copy::{CopyOutcome, copy_if_missing, ensure_dir};
pub use error::CopyError;
pub use progress::CopyProgress;
