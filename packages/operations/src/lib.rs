//! Sync planning and execution for dcim-sync.
//!
//! This crate compares two scanned trees and turns the difference into
//! work:
//!
//! * [`plan_sync`] compares high-water marks and produces ordered
//!   [`CopyTask`]s covering only the content the destination is missing
//! * [`choose_case_fold`] infers the destination's naming convention
//! * [`execute_task`] applies one task against the filesystem
//!
//! # Example
//!
//! ```rust,ignore
//! use dcim_sync_operations::{choose_case_fold, execute_task, plan_sync};
//!
//! let fold = choose_case_fold(&dest, false, false);
//! for task in plan_sync(&src, &dest)? {
//!     execute_task(&task, &src, dest.root(), fold, false, |progress| {
//!         println!("{}/{}", progress.files_done, progress.files_total);
//!     })?;
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod error;
mod fold;
mod plan;

pub use apply::{FileRecord, TaskReport, execute_task};
pub use dcim_sync_copy::{CopyOutcome, CopyProgress};
pub use error::{OperationError, PlanError};
pub use fold::choose_case_fold;
pub use plan::{CopyTask, plan_sync, task_file_count};
