//! Numeric directory tree index for dcim-sync.
//!
//! A camera tree is two levels deep: numbered subdirectories under the root,
//! numbered files inside them. [`DirectoryIndex`] scans one root into maps
//! keyed by those numbers, and [`DirectoryIndex::high_water_mark`] derives
//! the highest (directory, file) pair holding actual content.
//!
//! # Example
//!
//! ```rust,ignore
//! use dcim_sync_index::DirectoryIndex;
//!
//! let mut index = DirectoryIndex::new("/media/card/DCIM");
//! index.scan()?;
//!
//! if let Some(mark) = index.high_water_mark() {
//!     println!("newest content: {}/{}", mark.dir_number, mark.file_number);
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod index;

pub use error::ScanError;
pub use index::{DirectoryIndex, HighWaterMark};
