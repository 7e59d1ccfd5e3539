//! Sync planning - enumerate copy tasks without executing.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ops::Bound;

use dcim_sync_index::DirectoryIndex;

use crate::error::PlanError;

/// A contiguous file-number range within one source directory to copy in
/// full (all raw names per number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTask {
    /// Source directory number.
    pub dir_number: u32,
    /// First file number of the range (inclusive).
    pub start: u32,
    /// Last file number (inclusive), or `None` for "through the end of the
    /// directory".
    pub end: Option<u32>,
}

impl std::fmt::Display for CopyTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{:03}: files {}-{}", self.dir_number, self.start, end),
            None => write!(f, "{:03}: files {}-", self.dir_number, self.start),
        }
    }
}

impl CopyTask {
    /// The `BTreeMap::range` bounds covered by this task.
    #[must_use]
    pub fn bounds(&self) -> (Bound<u32>, Bound<u32>) {
        let upper = self.end.map_or(Bound::Unbounded, Bound::Included);
        (Bound::Included(self.start), upper)
    }
}

/// Compare source and destination marks and produce the ordered copy tasks.
///
/// The destination is never "finished past" a directory boundary: once the
/// source is ahead by whole directories, the destination's last directory is
/// topped up from `dest_file + 1`, and every higher source directory is
/// copied in full starting at its own lowest file number.
///
/// An empty destination receives a full-directory task for every non-empty
/// source directory. A destination at or ahead of the source yields no
/// tasks.
///
/// # Errors
///
/// * [`PlanError::NoSourceData`] if the source has no non-empty numbered
///   directory
pub fn plan_sync(src: &DirectoryIndex, dest: &DirectoryIndex) -> Result<Vec<CopyTask>, PlanError> {
    let src_mark = src.high_water_mark().ok_or_else(|| PlanError::NoSourceData {
        root: src.root().to_path_buf(),
    })?;

    let Some(dest_mark) = dest.high_water_mark() else {
        log::debug!("Destination is empty, copying everything up to {src_mark}");
        return Ok(src
            .non_empty_dirs()
            .filter_map(|dir| full_directory_task(src, dir))
            .collect());
    };

    log::debug!("Source mark {src_mark}, destination mark {dest_mark}");

    if src_mark <= dest_mark {
        return Ok(Vec::new());
    }

    if src_mark.dir_number == dest_mark.dir_number {
        return Ok(vec![CopyTask {
            dir_number: src_mark.dir_number,
            start: dest_mark.file_number + 1,
            end: Some(src_mark.file_number),
        }]);
    }

    // Source is ahead by whole directories: top up the destination's last
    // directory, then take every higher source directory in full.
    let mut tasks = Vec::new();

    if src.files_in(dest_mark.dir_number).is_some() {
        tasks.push(CopyTask {
            dir_number: dest_mark.dir_number,
            start: dest_mark.file_number + 1,
            end: None,
        });
    }

    tasks.extend(
        src.non_empty_dirs()
            .filter(|&dir| dir > dest_mark.dir_number)
            .filter_map(|dir| full_directory_task(src, dir)),
    );

    Ok(tasks)
}

/// Number of raw file names a task covers (gaps contribute nothing).
#[must_use]
pub fn task_file_count(src: &DirectoryIndex, task: &CopyTask) -> u64 {
    src.files_in(task.dir_number).map_or(0, |files| {
        files.range(task.bounds()).map(|(_, names)| names.len() as u64).sum()
    })
}

/// A task covering a directory's entire file-number range.
fn full_directory_task(src: &DirectoryIndex, dir_number: u32) -> Option<CopyTask> {
    let files = src.files_in(dir_number)?;
    let (&start, _) = files.first_key_value()?;

    Some(CopyTask {
        dir_number,
        start,
        end: None,
    })
}
