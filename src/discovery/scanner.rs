//! Directory scanning functionality
//!
//! This module contains functions for listing a directory once and
//! reading the type of every entry in that listing.

use std::ffi::OsString;
use std::path::Path;

use log::debug;

use crate::errors::{Result, directory_access_error, file_stat_error, prefix_overflow_error};
use crate::file_ops::FileSystem;
use crate::naming::ParsedName;

/// An entry of the scanned directory together with its file type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The entry name as returned by the listing
    pub name: OsString,
    /// Whether the entry is a regular file (symlinks are followed)
    pub is_regular_file: bool,
}

impl DirectoryEntry {
    /// Reads the type of the entry called `name` inside `directory`
    ///
    /// # Errors
    /// Returns a stat error carrying the entry path if the type cannot be read
    pub fn stat<F: FileSystem + ?Sized>(fs: &F, directory: &Path, name: OsString) -> Result<Self> {
        let path = directory.join(&name);
        let is_regular_file = fs
            .is_regular_file(&path)
            .map_err(|e| file_stat_error(e, path))?;

        Ok(DirectoryEntry {
            name,
            is_regular_file,
        })
    }
}

/// Lists all entries of a directory, sorted by name
///
/// The listing is taken once. Sorting makes the outcome independent of the
/// order in which the operating system returns entries.
///
/// # Errors
/// Returns a directory access error if the directory cannot be read
pub fn list_entries<F: FileSystem + ?Sized>(fs: &F, directory: &Path) -> Result<Vec<OsString>> {
    debug!("Scanning directory: {}", directory.display());

    let mut names = fs
        .list_directory(directory)
        .map_err(|e| directory_access_error(e, directory.to_path_buf()))?;
    names.sort();

    debug!("Found {} entries in directory", names.len());

    Ok(names)
}

/// Finds the largest numeric prefix among the given names
///
/// Only names are inspected, so directories and other entry types count
/// as well. Returns 0 when no name carries a prefix.
///
/// # Errors
/// Returns a prefix overflow error if a prefix does not fit into u64
pub fn highest_prefix(names: &[OsString]) -> Result<u64> {
    let mut highest = 0;

    for name in names {
        let name = name.to_string_lossy();
        let parsed = ParsedName::parse(&name);
        if !parsed.has_prefix {
            continue;
        }
        let value = parsed
            .prefix_value
            .ok_or_else(|| prefix_overflow_error(&name))?;
        highest = highest.max(value);
    }

    Ok(highest)
}
