//! File operations module
//!
//! This module contains the filesystem capability used by the engine and
//! the execution of a computed rename plan.

mod actions;
mod filesystem;
#[cfg(test)]
pub(crate) mod memory;

pub use actions::execute_plan;
pub use filesystem::{FileSystem, LocalFileSystem};
