//! Run report
//!
//! This module defines what a renumbering run hands back to its caller.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::planner::RenameRecord;

/// Outcome of a renumbering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameReport {
    directory: PathBuf,
    renames: Vec<RenameRecord>,
    candidates: usize,
    unchanged: usize,
    skipped_extension: usize,
    already_prefixed: usize,
    dry_run: bool,
}

impl RenameReport {
    /// Report for a run that found nothing to rename
    pub fn nothing_to_rename(directory: &Path, dry_run: bool) -> Self {
        RenameReport {
            directory: directory.to_path_buf(),
            renames: Vec::new(),
            candidates: 0,
            unchanged: 0,
            skipped_extension: 0,
            already_prefixed: 0,
            dry_run,
        }
    }

    /// Report for a run that processed `candidates` files
    ///
    /// # Arguments
    /// * `directory` - The renumbered directory
    /// * `renames` - Renames performed (or planned, in dry-run mode)
    /// * `candidates` - Number of files that took part in the run
    /// * `dry_run` - Whether the renames were only planned
    pub fn new(
        directory: &Path,
        renames: Vec<RenameRecord>,
        candidates: usize,
        dry_run: bool,
    ) -> Self {
        RenameReport {
            directory: directory.to_path_buf(),
            unchanged: candidates.saturating_sub(renames.len()),
            renames,
            candidates,
            skipped_extension: 0,
            already_prefixed: 0,
            dry_run,
        }
    }

    /// Records the files that were left out of the run
    pub fn with_skipped(mut self, skipped_extension: usize, already_prefixed: usize) -> Self {
        self.skipped_extension = skipped_extension;
        self.already_prefixed = already_prefixed;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Renames in the order they were applied
    pub fn renames(&self) -> &[RenameRecord] {
        &self.renames
    }

    pub fn renamed_count(&self) -> usize {
        self.renames.len()
    }

    /// Number of files that took part in the run
    pub fn candidate_count(&self) -> usize {
        self.candidates
    }

    /// Number of candidates that already carried their new name
    pub fn unchanged_count(&self) -> usize {
        self.unchanged
    }

    /// Number of files left alone because of their extension
    pub fn skipped_extension_count(&self) -> usize {
        self.skipped_extension
    }

    /// Number of files left alone because they already carry a prefix
    pub fn already_prefixed_count(&self) -> usize {
        self.already_prefixed
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether no file needed renaming
    pub fn is_empty(&self) -> bool {
        self.candidates == 0
    }
}

impl fmt::Display for RenameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No files needed renaming.");
        }
        if self.dry_run {
            write!(
                f,
                "Would rename {} of {} files.",
                self.renamed_count(),
                self.candidates
            )?;
        } else {
            write!(
                f,
                "All files renamed successfully ({} renamed, {} already numbered).",
                self.renamed_count(),
                self.unchanged
            )?;
        }
        if self.skipped_extension + self.already_prefixed > 0 {
            write!(
                f,
                " Left alone: {} skipped by extension, {} already prefixed.",
                self.skipped_extension, self.already_prefixed
            )?;
        }
        Ok(())
    }
}
