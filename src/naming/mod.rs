//! File name handling module
//!
//! This module contains components for recognising numeric prefixes,
//! extracting extensions and ordering base names.

mod collation;
mod extension;
mod prefix;

pub use collation::compare_base_names;
pub use extension::extension_of;
pub use prefix::{ParsedName, format_prefixed, has_prefix, strip_prefix};
