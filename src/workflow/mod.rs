//! Workflow module
//!
//! This module contains the entry point that runs discovery, planning and
//! execution for one directory.

mod engine;
mod options;
mod report;

pub use engine::{renumber_directory, renumber_directory_with};
pub use options::{RenumberOptions, RenumberOptionsBuilder};
pub use report::RenameReport;
