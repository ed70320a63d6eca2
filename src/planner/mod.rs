//! Rename planning module
//!
//! This module turns the candidates found during discovery into an ordered
//! rename plan. Nothing in here touches the filesystem.

mod plan;

pub use plan::{RenamePlan, RenameRecord, build_plan, digit_count, prefix_width};
