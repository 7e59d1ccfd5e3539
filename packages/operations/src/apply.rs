//! Copy task execution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use dcim_sync_copy::{CopyOutcome, CopyProgress, copy_if_missing, ensure_dir};
use dcim_sync_index::DirectoryIndex;
use dcim_sync_naming::CaseFold;

use crate::error::OperationError;
use crate::plan::{CopyTask, task_file_count};

/// Record of a single file handled by a task.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Destination file name (case fold already applied).
    pub name: String,
    /// What happened to it.
    pub outcome: CopyOutcome,
}

/// Result of executing one copy task.
#[derive(Debug, Clone)]
pub struct TaskReport {
    /// Source directory number the task covered.
    pub dir_number: u32,
    /// Destination subdirectory name (case fold already applied).
    pub dest_dir_name: String,
    /// Per-file records in copy order.
    pub records: Vec<FileRecord>,
}

impl TaskReport {
    /// Number of files whose bytes were copied.
    #[must_use]
    pub fn copied(&self) -> u64 {
        self.count(CopyOutcome::Copied)
    }

    /// Number of files skipped as already synced.
    #[must_use]
    pub fn already_present(&self) -> u64 {
        self.count(CopyOutcome::AlreadyPresent)
    }

    /// Number of files a dry run would have copied.
    #[must_use]
    pub fn would_copy(&self) -> u64 {
        self.count(CopyOutcome::WouldCopy)
    }

    fn count(&self, outcome: CopyOutcome) -> u64 {
        self.records.iter().filter(|r| r.outcome == outcome).count() as u64
    }
}

/// Execute one copy task against the destination tree.
///
/// The destination subdirectory is named by folding the source directory's
/// full name and created on demand (never in a dry run). Every raw name
/// sharing a file number in the task's range is handled; numbers without
/// files are gaps and are skipped silently. Execution is not transactional:
/// a mid-task failure leaves earlier copies in place, and re-running is safe
/// because non-empty destination files are skipped.
///
/// `on_progress` is called once per file with the running totals.
///
/// # Errors
///
/// * If the destination directory can't be created
/// * If a copy fails (fatal for the run; nothing is rolled back)
pub fn execute_task<F>(
    task: &CopyTask,
    src: &DirectoryIndex,
    dest_root: &Path,
    fold: CaseFold,
    dry_run: bool,
    on_progress: F,
) -> Result<TaskReport, OperationError>
where
    F: Fn(&CopyProgress),
{
    let Some(src_dir_name) = src.dir_name(task.dir_number) else {
        // Planner only emits tasks for indexed directories.
        log::debug!("No source directory numbered {}, nothing to do", task.dir_number);
        return Ok(TaskReport {
            dir_number: task.dir_number,
            dest_dir_name: String::new(),
            records: Vec::new(),
        });
    };

    let src_dir = src.root().join(src_dir_name);
    let dest_dir_name = fold.apply(src_dir_name);
    let dest_dir = dest_root.join(&dest_dir_name);
    let files_total = task_file_count(src, task);

    log::info!(
        "Task {task}: {files_total} files, {} -> {}",
        src_dir.display(),
        dest_dir.display()
    );

    if !dry_run {
        ensure_dir(&dest_dir)?;
    }

    let mut records = Vec::new();
    let mut files_done = 0;

    if let Some(files) = src.files_in(task.dir_number) {
        for (_, names) in files.range(task.bounds()) {
            for name in names {
                let dest_name = fold.apply(name);
                let outcome =
                    copy_if_missing(&src_dir.join(name), &dest_dir.join(&dest_name), dry_run)?;

                files_done += 1;
                on_progress(&CopyProgress::new(
                    files_total,
                    files_done,
                    Some(dest_name.clone()),
                ));
                records.push(FileRecord {
                    name: dest_name,
                    outcome,
                });
            }
        }
    }

    Ok(TaskReport {
        dir_number: task.dir_number,
        dest_dir_name,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    use crate::fold::choose_case_fold;
    use crate::plan::plan_sync;

    fn make_tree(root: &Path, dirs: &[(&str, &[&str])]) {
        for (dir, files) in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
            for file in *files {
                fs::write(root.join(dir).join(file), "content").unwrap();
            }
        }
    }

    fn scanned(root: &Path) -> DirectoryIndex {
        let mut index = DirectoryIndex::new(root);
        index.scan().unwrap();
        index
    }

    fn run_sync(src_root: &Path, dest_root: &Path) -> Vec<TaskReport> {
        let src = scanned(src_root);
        let dest = scanned(dest_root);
        let fold = choose_case_fold(&dest, false, false);

        plan_sync(&src, &dest)
            .unwrap()
            .iter()
            .map(|task| execute_task(task, &src, dest_root, fold, false, |_| {}).unwrap())
            .collect()
    }

    #[test]
    fn test_sync_reaches_source_mark() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(
            src_dir.path(),
            &[
                ("100CANON", &["IMG_0004.JPG", "IMG_0005.JPG"]),
                ("101CANON", &["IMG_0001.JPG", "IMG_0003.JPG"]),
            ],
        );

        run_sync(src_dir.path(), dest_dir.path());

        let src = scanned(src_dir.path());
        let dest = scanned(dest_dir.path());
        assert_eq!(dest.high_water_mark(), src.high_water_mark());
    }

    #[test]
    fn test_scenario_two_directory_delta() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(
            src_dir.path(),
            &[
                (
                    "100CANON",
                    &[
                        "IMG_0001.JPG",
                        "IMG_0002.JPG",
                        "IMG_0003.JPG",
                        "IMG_0004.JPG",
                        "IMG_0005.JPG",
                    ],
                ),
                ("101CANON", &["IMG_0001.JPG", "IMG_0002.JPG", "IMG_0003.JPG"]),
            ],
        );
        make_tree(
            dest_dir.path(),
            &[("100CANON", &["IMG_0001.JPG", "IMG_0002.JPG", "IMG_0003.JPG"])],
        );

        let reports = run_sync(src_dir.path(), dest_dir.path());

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].copied(), 2);
        assert_eq!(reports[1].copied(), 3);

        let mark = scanned(dest_dir.path()).high_water_mark().unwrap();
        assert_eq!((mark.dir_number, mark.file_number), (101, 3));
    }

    #[test]
    fn test_rerun_copies_nothing() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(
            src_dir.path(),
            &[("100CANON", &["IMG_0001.JPG", "IMG_0002.JPG"])],
        );

        let first: u64 = run_sync(src_dir.path(), dest_dir.path())
            .iter()
            .map(TaskReport::copied)
            .sum();
        assert_eq!(first, 2);

        // The destination now matches the source; the plan is empty.
        let src = scanned(src_dir.path());
        let dest = scanned(dest_dir.path());
        assert!(plan_sync(&src, &dest).unwrap().is_empty());
    }

    #[test]
    fn test_case_fold_applies_to_directories_and_files() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(src_dir.path(), &[("100CANON", &["IMG_0001.JPG"])]);

        // Empty destination defaults to lowercase.
        run_sync(src_dir.path(), dest_dir.path());

        assert!(dest_dir.path().join("100canon/img_0001.jpg").exists());
        assert!(!dest_dir.path().join("100CANON").exists());
    }

    #[test]
    fn test_skips_non_empty_but_fills_zero_byte() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(
            src_dir.path(),
            &[("100CANON", &["IMG_0001.JPG", "IMG_0002.JPG"])],
        );
        make_tree(dest_dir.path(), &[("100CANON", &["IMG_0001.JPG"])]);
        // An interrupted earlier run left a zero-byte file at the mark.
        fs::write(dest_dir.path().join("100CANON/IMG_0002.JPG"), "").unwrap();

        // Marks are equal, so force the range by planning manually.
        let src = scanned(src_dir.path());
        let task = CopyTask {
            dir_number: 100,
            start: 1,
            end: None,
        };
        let report = execute_task(
            &task,
            &src,
            dest_dir.path(),
            CaseFold::Identity,
            false,
            |_| {},
        )
        .unwrap();

        assert_eq!(report.already_present(), 1);
        assert_eq!(report.copied(), 1);
        assert_eq!(
            fs::read_to_string(dest_dir.path().join("100CANON/IMG_0002.JPG")).unwrap(),
            "content"
        );
    }

    #[test]
    fn test_gaps_are_skipped_silently() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(
            src_dir.path(),
            &[("100CANON", &["IMG_0001.JPG", "IMG_0005.JPG"])],
        );

        let src = scanned(src_dir.path());
        let task = CopyTask {
            dir_number: 100,
            start: 2,
            end: None,
        };
        let report = execute_task(
            &task,
            &src,
            dest_dir.path(),
            CaseFold::Identity,
            false,
            |_| {},
        )
        .unwrap();

        assert_eq!(report.copied(), 1);
        assert!(dest_dir.path().join("100CANON/IMG_0005.JPG").exists());
        assert!(!dest_dir.path().join("100CANON/IMG_0001.JPG").exists());
    }

    #[test]
    fn test_collision_names_copied_together() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(
            src_dir.path(),
            &[("100CANON", &["IMG_0001.JPG", "MVI_0001.MOV"])],
        );

        let reports = run_sync(src_dir.path(), dest_dir.path());

        assert_eq!(reports[0].copied(), 2);
        assert!(dest_dir.path().join("100canon/img_0001.jpg").exists());
        assert!(dest_dir.path().join("100canon/mvi_0001.mov").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(src_dir.path(), &[("100CANON", &["IMG_0001.JPG"])]);

        let src = scanned(src_dir.path());
        let dest = scanned(dest_dir.path());
        let tasks = plan_sync(&src, &dest).unwrap();
        let report = execute_task(
            &tasks[0],
            &src,
            dest_dir.path(),
            CaseFold::Lower,
            true,
            |_| {},
        )
        .unwrap();

        assert_eq!(report.would_copy(), 1);
        assert_eq!(report.copied(), 0);
        assert_eq!(fs::read_dir(dest_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_progress_reports_every_file() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        make_tree(
            src_dir.path(),
            &[("100CANON", &["IMG_0001.JPG", "IMG_0002.JPG", "IMG_0003.JPG"])],
        );

        let src = scanned(src_dir.path());
        let task = CopyTask {
            dir_number: 100,
            start: 1,
            end: None,
        };

        let seen = std::cell::RefCell::new(Vec::new());
        execute_task(&task, &src, dest_dir.path(), CaseFold::Identity, false, |p| {
            seen.borrow_mut().push((p.files_done, p.files_total));
        })
        .unwrap();

        assert_eq!(seen.into_inner(), vec![(1, 3), (2, 3), (3, 3)]);
    }
}
