use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::planner::RenameRecord;

/// Custom error type for the File Renumber application
#[derive(Debug)]
pub enum Error {
    /// The target directory is missing, not a directory, or unreadable
    DirectoryAccess { source: io::Error, path: PathBuf },
    /// A listed entry could not be stat'ed
    FileStat { source: io::Error, path: PathBuf },
    /// A rename failed; `completed` holds the renames applied before the failure
    Rename {
        source: io::Error,
        from: PathBuf,
        to: PathBuf,
        completed: Vec<RenameRecord>,
    },
    /// A prefix value or the numbering derived from it does not fit into u64
    PrefixOverflow { name: String },
    /// The directory argument cannot be turned into a usable path
    InvalidDirectory { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryAccess { source, path } => {
                write!(f, "Cannot read directory {}: {source}", path.display())
            }
            Error::FileStat { source, path } => {
                write!(f, "Failed to stat file {}: {source}", path.display())
            }
            Error::Rename {
                source, from, to, ..
            } => {
                write!(
                    f,
                    "Failed to rename {} to {}: {source}",
                    from.display(),
                    to.display()
                )
            }
            Error::PrefixOverflow { name } => {
                write!(f, "Numeric prefix is too large to renumber: {name}")
            }
            Error::InvalidDirectory { path } => {
                write!(f, "Invalid directory path: '{}'", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::DirectoryAccess { source, .. } => Some(source),
            Error::FileStat { source, .. } => Some(source),
            Error::Rename { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Error {
    /// Renames that were applied before the run aborted
    ///
    /// Only a failed rename can leave the directory partially renumbered;
    /// every other error is raised before the first mutation.
    pub fn completed_renames(&self) -> &[RenameRecord] {
        match self {
            Error::Rename { completed, .. } => completed,
            _ => &[],
        }
    }

    /// Whether the directory was modified before the error occurred
    pub fn is_partial_failure(&self) -> bool {
        !self.completed_renames().is_empty()
    }
}

/// Custom Result type for the File Renumber application
///
/// # Examples
/// ```
/// use file_renumber::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a directory access error
pub fn directory_access_error(err: io::Error, path: PathBuf) -> Error {
    Error::DirectoryAccess { source: err, path }
}

/// Helper function to create a file stat error
pub fn file_stat_error(err: io::Error, path: PathBuf) -> Error {
    Error::FileStat { source: err, path }
}

/// Helper function to create a rename error
pub fn rename_error(
    err: io::Error,
    from: PathBuf,
    to: PathBuf,
    completed: Vec<RenameRecord>,
) -> Error {
    Error::Rename {
        source: err,
        from,
        to,
        completed,
    }
}

/// Helper function to create a prefix overflow error
pub fn prefix_overflow_error(name: &str) -> Error {
    Error::PrefixOverflow {
        name: name.to_string(),
    }
}

/// Helper function to create an invalid directory error
pub fn invalid_directory_error(path: PathBuf) -> Error {
    Error::InvalidDirectory { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
