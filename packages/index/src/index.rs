//! Two-level scan of a camera tree into numeric maps.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use dcim_sync_naming::{contains_lowercase, contains_uppercase, match_file, match_subdir};

use crate::error::ScanError;

/// The highest (directory-number, file-number) pair holding actual content.
///
/// Ordering is lexicographic: the directory number dominates, the file
/// number breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HighWaterMark {
    /// Number of the highest non-empty directory.
    pub dir_number: u32,
    /// Highest file number within that directory.
    pub file_number: u32,
}

impl std::fmt::Display for HighWaterMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}/{}", self.dir_number, self.file_number)
    }
}

/// Numeric index of one camera-style tree.
///
/// Constructed unscanned; populated by [`scan`](Self::scan). Query methods
/// must not be called before a successful scan (their results would describe
/// an empty tree). Re-scanning rebuilds the index from scratch.
#[derive(Debug, Clone)]
pub struct DirectoryIndex {
    root: PathBuf,
    /// Directory number -> full entry name, for every recognized subdirectory.
    dir_names: BTreeMap<u32, String>,
    /// Directory number -> file number -> raw names sharing that number.
    /// Only directories with at least one recognized file appear here.
    dir_files: BTreeMap<u32, BTreeMap<u32, BTreeSet<String>>>,
    has_uppercase: bool,
    has_lowercase: bool,
    scanned: bool,
}

impl DirectoryIndex {
    /// Create an unscanned index for the tree rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dir_names: BTreeMap::new(),
            dir_files: BTreeMap::new(),
            has_uppercase: false,
            has_lowercase: false,
            scanned: false,
        }
    }

    /// Scan the tree: root entries first, then each recognized subdirectory.
    ///
    /// Two entries collapsing to the same directory number: the last one
    /// enumerated wins, and only the winner's files are indexed. Directories
    /// without a single recognized file stay out of the content maps, so
    /// they never influence the high-water mark. Casing flags are collected
    /// from every recognized file name and from the names of directories
    /// that turned out non-empty.
    ///
    /// # Errors
    ///
    /// * If the root or any recognized subdirectory can't be listed
    pub fn scan(&mut self) -> Result<(), ScanError> {
        log::debug!("Scanning {}", self.root.display());

        self.dir_names.clear();
        self.dir_files.clear();
        self.has_uppercase = false;
        self.has_lowercase = false;

        for name in list_entries(&self.root)? {
            if let Some(subdir) = match_subdir(&name) {
                if self.root.join(&name).is_dir() {
                    // Last enumerated entry wins on number collisions.
                    self.dir_names.insert(subdir.number, subdir.name);
                }
            }
        }

        for (&dir_number, dir_name) in &self.dir_names {
            let mut files: BTreeMap<u32, BTreeSet<String>> = BTreeMap::new();
            let mut has_upper = false;
            let mut has_lower = false;

            for name in list_entries(&self.root.join(dir_name))? {
                if let Some(file) = match_file(&name) {
                    has_upper |= contains_uppercase(&name);
                    has_lower |= contains_lowercase(&name);
                    files.entry(file.number).or_default().insert(name);
                }
            }

            if files.is_empty() {
                log::debug!("{dir_name}: no recognized files");
                continue;
            }

            log::debug!("{dir_name}: {} file numbers", files.len());
            self.has_uppercase |= has_upper || contains_uppercase(dir_name);
            self.has_lowercase |= has_lower || contains_lowercase(dir_name);
            self.dir_files.insert(dir_number, files);
        }

        self.scanned = true;
        log::debug!(
            "{}: {} numbered directories, {} with content",
            self.root.display(),
            self.dir_names.len(),
            self.dir_files.len()
        );

        Ok(())
    }

    /// The root path this index describes.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether [`scan`](Self::scan) has completed successfully.
    #[must_use]
    pub const fn is_scanned(&self) -> bool {
        self.scanned
    }

    /// Whether any recognized name contained an uppercase letter.
    #[must_use]
    pub const fn has_uppercase(&self) -> bool {
        self.has_uppercase
    }

    /// Whether any recognized name contained a lowercase letter.
    #[must_use]
    pub const fn has_lowercase(&self) -> bool {
        self.has_lowercase
    }

    /// Full entry name of a recognized subdirectory.
    #[must_use]
    pub fn dir_name(&self, dir_number: u32) -> Option<&str> {
        self.dir_names.get(&dir_number).map(String::as_str)
    }

    /// File-number map of a non-empty directory.
    #[must_use]
    pub fn files_in(&self, dir_number: u32) -> Option<&BTreeMap<u32, BTreeSet<String>>> {
        self.dir_files.get(&dir_number)
    }

    /// Raw names sharing one file number within one directory.
    #[must_use]
    pub fn file_names(&self, dir_number: u32, file_number: u32) -> Option<&BTreeSet<String>> {
        self.dir_files.get(&dir_number)?.get(&file_number)
    }

    /// Numbers of directories holding at least one recognized file,
    /// ascending.
    pub fn non_empty_dirs(&self) -> impl Iterator<Item = u32> + '_ {
        self.dir_files.keys().copied()
    }

    /// The highest non-empty (directory, file) pair, or `None` for a tree
    /// without recognized content.
    ///
    /// Numbered-but-empty directories are invisible here, even when their
    /// number exceeds every non-empty one.
    #[must_use]
    pub fn high_water_mark(&self) -> Option<HighWaterMark> {
        let (&dir_number, files) = self.dir_files.last_key_value()?;
        let (&file_number, _) = files.last_key_value()?;

        Some(HighWaterMark {
            dir_number,
            file_number,
        })
    }
}

/// List entry names directly under `path`.
fn list_entries(path: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(path).map_err(|e| ScanError::ReadDir {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::ReadDir {
            path: path.to_path_buf(),
            source: e,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}
