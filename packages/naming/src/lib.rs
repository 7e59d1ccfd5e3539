//! Camera-style name recognition for dcim-sync.
//!
//! Cameras write DCIM trees: numbered subdirectories (`100CANON`) holding
//! numbered files (`IMG_0042.JPG`). This crate provides the pure string
//! layer for that layout:
//!
//! * Matchers extracting numeric keys from directory and file names
//! * The `CaseFold` transform applied to destination-bound names
//!
//! No I/O happens here; everything is total and deterministic.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod casefold;
mod parse;

pub use casefold::{CaseFold, contains_lowercase, contains_uppercase};
pub use parse::{FileMatch, SubdirMatch, match_file, match_subdir};
