//! Renumbers the files of a directory by prefixing them with zero-padded
//! numbers in alphabetical order of their base names.
//!
//! A run has two phases. Discovery lists the directory once, finds the
//! highest existing prefix and decides which files take part. Planning then
//! sorts those files, computes every new name up front and only afterwards
//! applies the renames.

pub use errors::{Error, Result};
pub use file_ops::{FileSystem, LocalFileSystem};
pub use planner::{RenamePlan, RenameRecord};
pub use workflow::{
    RenameReport, RenumberOptions, RenumberOptionsBuilder, renumber_directory,
    renumber_directory_with,
};

pub mod cli;
pub mod constants;
pub mod discovery;
mod errors;
pub mod file_ops;
pub mod logging;
pub mod naming;
pub mod planner;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        directory_access_error, file_stat_error, generic_error, invalid_directory_error,
        prefix_overflow_error, rename_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{RenameReport, RenumberOptions, renumber_directory};
}
