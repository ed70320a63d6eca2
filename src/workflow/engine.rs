//! Workflow engine
//!
//! This module contains the engine that runs the two phases of a
//! renumbering: classification, then planning and execution.

use std::path::Path;

use log::{debug, info};

use crate::discovery::classify_entries;
use crate::errors::{Result, invalid_directory_error};
use crate::file_ops::{FileSystem, LocalFileSystem, execute_plan};
use crate::planner::build_plan;

use super::options::RenumberOptions;
use super::report::RenameReport;

/// Renumbers the files of a directory on the local filesystem
///
/// See [`renumber_directory_with`] for details.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use file_renumber::{RenumberOptions, renumber_directory};
///
/// let options = RenumberOptions::builder().skip_extensions([".log"]).build();
/// let report = renumber_directory(Path::new("/tmp/photos"), &options)?;
/// for rename in report.renames() {
///     println!("{rename}");
/// }
/// # Ok::<(), file_renumber::Error>(())
/// ```
pub fn renumber_directory(directory: &Path, options: &RenumberOptions) -> Result<RenameReport> {
    renumber_directory_with(&LocalFileSystem, directory, options)
}

/// Renumbers the files of a directory using the given filesystem
///
/// This function orchestrates the workflow steps:
/// 1. List the directory and find the highest existing prefix
/// 2. Classify every entry and collect the candidates
/// 3. Sort the candidates by base name and compute their new names
/// 4. Apply the renames, unless running in dry-run mode
///
/// # Arguments
/// * `fs` - Filesystem capability used for every listing, stat and rename
/// * `directory` - The directory whose files are renumbered
/// * `options` - Options for the run
///
/// # Returns
/// * `Result<RenameReport>` - The renames performed, or a report saying nothing needed renaming
///
/// # Errors
/// * Returns an error if the directory cannot be read
/// * Returns an error if an entry cannot be stat'ed; nothing has been renamed at that point
/// * Returns an error if a rename fails; renames applied before it are kept and listed in the error
pub fn renumber_directory_with<F: FileSystem + ?Sized>(
    fs: &F,
    directory: &Path,
    options: &RenumberOptions,
) -> Result<RenameReport> {
    if directory.as_os_str().is_empty() {
        return Err(invalid_directory_error(directory.to_path_buf()));
    }

    debug!("Renumbering with {options:?}");

    // Phase 1: classification
    let scan = classify_entries(fs, directory, options)?;

    if scan.candidates.is_empty() {
        let report = RenameReport::nothing_to_rename(directory, options.dry_run())
            .with_skipped(scan.skipped_extension, scan.already_prefixed);
        info!("{report}");
        return Ok(report);
    }

    // Phase 2: planning and execution
    let candidate_count = scan.candidates.len();
    let (skipped_extension, already_prefixed) = (scan.skipped_extension, scan.already_prefixed);
    let plan = build_plan(scan.candidates, scan.highest_prefix)?;
    let renames = execute_plan(fs, directory, &plan, !options.dry_run())?;

    let report = RenameReport::new(directory, renames, candidate_count, options.dry_run())
        .with_skipped(skipped_extension, already_prefixed);
    info!("{report}");

    Ok(report)
}
