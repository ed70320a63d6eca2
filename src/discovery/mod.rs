//! File discovery module
//!
//! This module contains the first phase of a run: listing the directory,
//! finding the prefix high-water mark and classifying every entry.

mod classifier;
mod scanner;

pub use classifier::{Candidate, Classification, ScanResult, classify_entries};
pub use scanner::{DirectoryEntry, highest_prefix, list_entries};
