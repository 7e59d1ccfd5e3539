//! dcim-sync CLI entry point.
//!
//! Copies the new tail of a camera-style (DCIM) tree into an archive tree,
//! deciding newness purely from the numeric ordering of directories and
//! files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use dialoguer::Confirm;
use path_clean::PathClean;

use args::Args;
use dcim_sync_index::DirectoryIndex;
use dcim_sync_operations::{choose_case_fold, execute_task, plan_sync, task_file_count};
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    // Set up logging
    if let Some(level) = args.log_level() {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", level);
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = resolve_dir(&args.source)?;
    let destination = resolve_dir(&args.destination)?;

    let mut src_index = DirectoryIndex::new(&source);
    src_index.scan()?;
    let mut dest_index = DirectoryIndex::new(&destination);
    dest_index.scan()?;

    output::print_header("DCIM Sync");
    output::print_tree_info("Source", &source, src_index.high_water_mark());
    output::print_tree_info("Destination", &destination, dest_index.high_water_mark());
    println!();

    let fold = choose_case_fold(&dest_index, args.lower, args.upper);
    log::debug!("Destination names will be {fold}");

    let tasks = plan_sync(&src_index, &dest_index)?;

    if tasks.is_empty() {
        output::print_in_sync();
        return Ok(());
    }

    let task_lines: Vec<(String, String, u64)> = tasks
        .iter()
        .map(|task| {
            let dir = src_index.dir_name(task.dir_number).unwrap_or("?").to_string();
            let range = task.end.map_or_else(
                || format!("files {}-", task.start),
                |end| format!("files {}-{}", task.start, end),
            );
            (dir, range, task_file_count(&src_index, task))
        })
        .collect();
    let total_files: u64 = task_lines.iter().map(|(_, _, n)| n).sum();
    output::print_plan(&task_lines, total_files);

    if !args.dry_run && !args.yes && console::user_attended() {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Copy {total_files} file{} to {}?",
                if total_files == 1 { "" } else { "s" },
                destination.display()
            ))
            .default(true)
            .interact()?;

        if !proceed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let progress_mgr = ProgressManager::new(args.should_show_progress());

    let mut copied = 0;
    let mut already_present = 0;
    let mut would_copy = 0;

    for (task, (label, _, file_count)) in tasks.iter().zip(&task_lines) {
        let needs_progress_bar = !args.dry_run && *file_count > 1;

        let report = if needs_progress_bar {
            let bar = progress_mgr.create_file_bar(label, *file_count);
            let report = execute_task(task, &src_index, &destination, fold, args.dry_run, |p| {
                bar.set_position(p.files_done);
            })?;
            bar.finish_and_clear();
            report
        } else {
            execute_task(task, &src_index, &destination, fold, args.dry_run, |_| {})?
        };

        if args.dry_run {
            // Per-file detail instead of bars: this is the whole point of -n.
            for record in &report.records {
                progress_mgr.print_result(
                    &format!("{}/{}", report.dest_dir_name, record.name),
                    &record.outcome.to_string(),
                    record.outcome == dcim_sync_operations::CopyOutcome::WouldCopy,
                );
            }
        } else {
            let result = format!(
                "{} copied, {} existing",
                report.copied(),
                report.already_present()
            );
            progress_mgr.print_result_with_count(label, &result, *file_count);
        }

        copied += report.copied();
        already_present += report.already_present();
        would_copy += report.would_copy();
    }

    progress_mgr.clear();
    println!();

    if args.dry_run {
        output::print_dry_run_summary(would_copy, already_present);
    } else {
        output::print_summary(copied, already_present);
    }

    Ok(())
}

/// Normalize a user-supplied path and require it to be an existing directory.
fn resolve_dir(path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = if path.is_absolute() {
        path.clean()
    } else {
        env::current_dir()?.join(path).clean()
    };

    if !path.is_dir() {
        return Err(format!("Not a directory: {}", path.display()).into());
    }

    Ok(path)
}
