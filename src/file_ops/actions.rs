//! Plan execution
//!
//! This module applies a computed rename plan to the filesystem.

use std::io;
use std::path::Path;

use colored::Colorize;
use log::{debug, info};

use crate::errors::{Result, rename_error};
use crate::logging::format_message;
use crate::planner::{RenamePlan, RenameRecord};

use super::FileSystem;

/// Applies the renames of a plan
///
/// Renames are applied one by one in plan order, except that a rename whose
/// target is still held by a pending rename waits until that file has moved.
/// No existing file is ever overwritten: a target that exists outside the
/// plan aborts the run.
///
/// # Arguments
/// * `fs` - Filesystem capability used for the renames
/// * `directory` - The directory that holds every file of the plan
/// * `plan` - The plan to apply
/// * `run_execution` - If false, the renames are only logged
///
/// # Returns
/// * `Result<Vec<RenameRecord>>` - The renames performed, in the order applied
///
/// # Errors
/// Returns a rename error carrying every rename applied before the failure
pub fn execute_plan<F: FileSystem + ?Sized>(
    fs: &F,
    directory: &Path,
    plan: &RenamePlan,
    run_execution: bool,
) -> Result<Vec<RenameRecord>> {
    if !run_execution {
        // Simulation mode, don't actually rename anything
        return Ok(plan
            .renames()
            .inspect(|record| log_rename("Would rename", record))
            .cloned()
            .collect());
    }

    let mut pending: Vec<&RenameRecord> = plan.renames().collect();
    let mut completed = Vec::with_capacity(pending.len());

    while !pending.is_empty() {
        let ready = pending
            .iter()
            .position(|record| !pending.iter().any(|other| other.from == record.to));

        let Some(index) = ready else {
            let record = pending[0];
            return Err(rename_error(
                io::Error::other("circular rename dependency"),
                directory.join(&record.from),
                directory.join(&record.to),
                completed,
            ));
        };

        let record = pending.remove(index);
        if let Err(e) = rename_file(fs, directory, record) {
            return Err(rename_error(
                e,
                directory.join(&record.from),
                directory.join(&record.to),
                completed,
            ));
        }

        log_rename("Renamed", record);
        completed.push(record.clone());
    }

    Ok(completed)
}

fn rename_file<F: FileSystem + ?Sized>(
    fs: &F,
    directory: &Path,
    record: &RenameRecord,
) -> io::Result<()> {
    let source = directory.join(&record.from);
    let target = directory.join(&record.to);

    if fs.exists(&target)? {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", record.to),
        ));
    }

    debug!("Renaming file: {} -> {}", source.display(), target.display());
    fs.rename(&source, &target)
}

fn log_rename(action: &str, record: &RenameRecord) {
    let message = format!("{action}: {} → {}", record.from, record.to);
    let colored_message = format!(
        "{action}: {} → {}",
        record.from,
        record.to.as_str().bold().green()
    );
    info!("{}", format_message(&message, &colored_message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Candidate;
    use crate::errors::Error;
    use crate::file_ops::memory::MemoryFileSystem;
    use crate::planner::build_plan;

    fn plan_for(names: &[&str], highest_prefix: u64) -> RenamePlan {
        let candidates = names.iter().map(|name| Candidate::new(name)).collect();
        build_plan(candidates, highest_prefix).unwrap()
    }

    #[test]
    fn test_execute_plan_renames_in_order() {
        let fs = MemoryFileSystem::new("/dir").with_files(&["c.txt", "a.txt", "b.txt"]);
        let plan = plan_for(&["c.txt", "a.txt", "b.txt"], 0);

        let completed = execute_plan(&fs, fs.root(), &plan, true).unwrap();

        assert_eq!(
            completed,
            vec![
                RenameRecord::new("a.txt", "01_a.txt"),
                RenameRecord::new("b.txt", "02_b.txt"),
                RenameRecord::new("c.txt", "03_c.txt"),
            ]
        );
        assert_eq!(fs.names(), vec!["01_a.txt", "02_b.txt", "03_c.txt"]);
    }

    #[test]
    fn test_execute_plan_dry_run_touches_nothing() {
        let fs = MemoryFileSystem::new("/dir").with_files(&["b.txt", "a.txt"]);
        let plan = plan_for(&["b.txt", "a.txt"], 0);

        let planned = execute_plan(&fs, fs.root(), &plan, false).unwrap();

        assert_eq!(planned.len(), 2);
        assert!(fs.rename_calls().is_empty());
        assert_eq!(fs.names(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_execute_plan_skips_noops() {
        let fs = MemoryFileSystem::new("/dir").with_files(&["01_a.txt", "b.txt"]);
        let plan = plan_for(&["01_a.txt", "b.txt"], 0);

        let completed = execute_plan(&fs, fs.root(), &plan, true).unwrap();

        assert_eq!(completed, vec![RenameRecord::new("b.txt", "02_b.txt")]);
        assert_eq!(fs.rename_calls().len(), 1);
    }

    #[test]
    fn test_execute_plan_waits_for_target_to_be_vacated() {
        // "001_x" wants the name "01_x", which "01_x" only frees once it
        // has become "02_x"
        let fs = MemoryFileSystem::new("/dir").with_files(&["001_x", "01_x"]);
        let plan = plan_for(&["001_x", "01_x"], 0);

        let completed = execute_plan(&fs, fs.root(), &plan, true).unwrap();

        assert_eq!(
            completed,
            vec![
                RenameRecord::new("01_x", "02_x"),
                RenameRecord::new("001_x", "01_x"),
            ]
        );
        assert_eq!(fs.names(), vec!["01_x", "02_x"]);
    }

    #[test]
    fn test_execute_plan_refuses_to_overwrite() {
        let fs = MemoryFileSystem::new("/dir").with_files(&["a.txt", "b.txt"]);
        let plan = plan_for(&["a.txt", "b.txt"], 0);
        // Appears after the plan was computed
        fs.add_file("02_b.txt");

        let result = execute_plan(&fs, fs.root(), &plan, true);

        match result {
            Err(Error::Rename {
                source,
                from,
                completed,
                ..
            }) => {
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
                assert_eq!(from, Path::new("/dir/b.txt"));
                assert_eq!(completed, vec![RenameRecord::new("a.txt", "01_a.txt")]);
            }
            other => panic!("Expected a rename error, got {other:?}"),
        }
        assert_eq!(fs.names(), vec!["01_a.txt", "02_b.txt", "b.txt"]);
    }

    #[test]
    fn test_execute_plan_stops_at_first_failure() {
        let fs = MemoryFileSystem::new("/dir")
            .with_files(&["a.txt", "b.txt", "c.txt"])
            .failing_rename("b.txt");
        let plan = plan_for(&["a.txt", "b.txt", "c.txt"], 0);

        let error = execute_plan(&fs, fs.root(), &plan, true).unwrap_err();

        assert!(error.is_partial_failure());
        assert_eq!(
            error.completed_renames(),
            &[RenameRecord::new("a.txt", "01_a.txt")]
        );
        // Nothing after the failing rename was attempted and nothing was rolled back
        assert_eq!(fs.names(), vec!["01_a.txt", "b.txt", "c.txt"]);
    }
}
