//! Entry classification
//!
//! Decides for every listed entry whether it takes part in the current run.

use std::path::Path;

use log::{debug, warn};

use crate::errors::Result;
use crate::file_ops::FileSystem;
use crate::naming::{extension_of, has_prefix, strip_prefix};
use crate::workflow::RenumberOptions;

use super::scanner::{DirectoryEntry, highest_prefix, list_entries};

/// A regular file that will receive a new prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Current file name
    pub name: String,
    /// File name without any numeric prefix; used for sorting and the new name
    pub base_name: String,
}

impl Candidate {
    pub fn new(name: &str) -> Self {
        Candidate {
            name: name.to_string(),
            base_name: strip_prefix(name).to_string(),
        }
    }
}

/// Outcome of classifying a single directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The entry takes part in the run
    Candidate(Candidate),
    /// Directories, sockets and the like are ignored without being reported
    NotRegularFile,
    /// The extension is on the skip list
    SkippedExtension,
    /// The name already carries a prefix and force mode is off
    AlreadyPrefixed,
    /// The name is not valid unicode and cannot be given a textual base name
    NonUnicodeName,
}

impl Classification {
    /// Classifies an entry whose file type is already known
    pub fn of(entry: &DirectoryEntry, options: &RenumberOptions) -> Self {
        if !entry.is_regular_file {
            return Classification::NotRegularFile;
        }

        let Some(name) = entry.name.to_str() else {
            return Classification::NonUnicodeName;
        };

        if options.skips_extension(&extension_of(name)) {
            return Classification::SkippedExtension;
        }

        if !options.force() && has_prefix(name) {
            return Classification::AlreadyPrefixed;
        }

        Classification::Candidate(Candidate::new(name))
    }
}

/// Result of the discovery phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Largest prefix seen in the listing, or 0 in force mode
    pub highest_prefix: u64,
    /// Files taking part in this run, in listing order
    pub candidates: Vec<Candidate>,
    /// Number of files left alone because of their extension
    pub skipped_extension: usize,
    /// Number of files left alone because they already carry a prefix
    pub already_prefixed: usize,
}

/// Lists `directory` and classifies every entry in it
///
/// # Arguments
/// * `fs` - Filesystem capability used for listing and stat calls
/// * `directory` - The directory to scan
/// * `options` - Options of the current run
///
/// # Returns
/// * `Result<ScanResult>` - The high-water mark and the candidates
///
/// # Errors
/// * Returns an error if the directory cannot be read
/// * Returns an error if any entry cannot be stat'ed; the whole scan is aborted
/// * Returns an error if an existing prefix does not fit into u64
pub fn classify_entries<F: FileSystem + ?Sized>(
    fs: &F,
    directory: &Path,
    options: &RenumberOptions,
) -> Result<ScanResult> {
    let names = list_entries(fs, directory)?;

    let mut result = ScanResult {
        highest_prefix: if options.force() {
            0
        } else {
            highest_prefix(&names)?
        },
        ..ScanResult::default()
    };
    debug!("Highest existing prefix: {}", result.highest_prefix);

    for name in names {
        let entry = DirectoryEntry::stat(fs, directory, name)?;

        match Classification::of(&entry, options) {
            Classification::Candidate(candidate) => {
                debug!("Candidate: {}", candidate.name);
                result.candidates.push(candidate);
            }
            Classification::NotRegularFile => {}
            Classification::SkippedExtension => {
                debug!("Skipping by extension: {}", entry.name.to_string_lossy());
                result.skipped_extension += 1;
            }
            Classification::AlreadyPrefixed => {
                debug!("Already prefixed: {}", entry.name.to_string_lossy());
                result.already_prefixed += 1;
            }
            Classification::NonUnicodeName => {
                warn!(
                    "Skipping file with a name that is not valid unicode: {}",
                    entry.name.to_string_lossy()
                );
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::file_ops::memory::{EntryKind, MemoryFileSystem};
    use std::ffi::OsString;

    fn entry(name: &str, is_regular_file: bool) -> DirectoryEntry {
        DirectoryEntry {
            name: OsString::from(name),
            is_regular_file,
        }
    }

    fn candidate_names(result: &ScanResult) -> Vec<&str> {
        result.candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_classify_plain_file() {
        let options = RenumberOptions::default();
        assert_eq!(
            Classification::of(&entry("a.txt", true), &options),
            Classification::Candidate(Candidate::new("a.txt"))
        );
    }

    #[test]
    fn test_classify_directory_is_ignored() {
        let options = RenumberOptions::builder().force(true).build();
        assert_eq!(
            Classification::of(&entry("photos", false), &options),
            Classification::NotRegularFile
        );
    }

    #[test]
    fn test_classify_skipped_extension_is_case_insensitive() {
        let options = RenumberOptions::builder().skip_extensions([".LOG"]).build();
        assert_eq!(
            Classification::of(&entry("debug.Log", true), &options),
            Classification::SkippedExtension
        );
    }

    #[test]
    fn test_classify_extension_skip_applies_before_prefix_check() {
        let options = RenumberOptions::builder().skip_extensions([".log"]).build();
        assert_eq!(
            Classification::of(&entry("01_debug.log", true), &options),
            Classification::SkippedExtension
        );
    }

    #[test]
    fn test_classify_prefixed_file() {
        let options = RenumberOptions::default();
        assert_eq!(
            Classification::of(&entry("01_a.txt", true), &options),
            Classification::AlreadyPrefixed
        );

        let forced = RenumberOptions::builder().force(true).build();
        assert_eq!(
            Classification::of(&entry("01_a.txt", true), &forced),
            Classification::Candidate(Candidate {
                name: "01_a.txt".to_string(),
                base_name: "a.txt".to_string(),
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_non_unicode_name() {
        use std::os::unix::ffi::OsStringExt;

        let entry = DirectoryEntry {
            name: OsString::from_vec(vec![b'a', 0xff, b'.', b't', b'x', b't']),
            is_regular_file: true,
        };
        assert_eq!(
            Classification::of(&entry, &RenumberOptions::default()),
            Classification::NonUnicodeName
        );
    }

    #[test]
    fn test_classify_entries_counts_high_water_mark_from_all_entries() {
        // The directory name counts towards the high-water mark even though
        // it never takes part in the run
        let fs = MemoryFileSystem::new("/dir")
            .with_files(&["03_a.txt", "b.txt", "skip.log"])
            .with_entry("12_archive", EntryKind::Directory);
        let options = RenumberOptions::builder().skip_extensions([".log"]).build();

        let result = classify_entries(&fs, fs.root(), &options).unwrap();

        assert_eq!(result.highest_prefix, 12);
        assert_eq!(candidate_names(&result), vec!["b.txt"]);
        assert_eq!(result.skipped_extension, 1);
        assert_eq!(result.already_prefixed, 1);
    }

    #[test]
    fn test_classify_entries_force_resets_high_water_mark() {
        let fs = MemoryFileSystem::new("/dir").with_files(&["10_z.txt", "a.txt"]);
        let options = RenumberOptions::builder().force(true).build();

        let result = classify_entries(&fs, fs.root(), &options).unwrap();

        assert_eq!(result.highest_prefix, 0);
        assert_eq!(candidate_names(&result), vec!["10_z.txt", "a.txt"]);
        assert_eq!(result.already_prefixed, 0);
    }

    #[test]
    fn test_classify_entries_aborts_on_stat_failure() {
        let fs = MemoryFileSystem::new("/dir")
            .with_files(&["a.txt", "b.txt"])
            .failing_stat("b.txt");

        let result = classify_entries(&fs, fs.root(), &RenumberOptions::default());

        assert!(matches!(result, Err(Error::FileStat { .. })));
    }

    #[test]
    fn test_classify_entries_stat_failure_on_ignored_entry_still_aborts() {
        // Extension skipping happens after the stat call
        let fs = MemoryFileSystem::new("/dir")
            .with_files(&["a.txt", "broken.log"])
            .failing_stat("broken.log");
        let options = RenumberOptions::builder().skip_extensions([".log"]).build();

        let result = classify_entries(&fs, fs.root(), &options);

        assert!(matches!(result, Err(Error::FileStat { .. })));
    }
}
