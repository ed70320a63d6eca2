//! Rename plan construction

use std::fmt;

use log::{debug, trace};

use crate::constants::MIN_PREFIX_WIDTH;
use crate::discovery::Candidate;
use crate::errors::{Result, prefix_overflow_error};
use crate::naming::{compare_base_names, format_prefixed};

/// A single rename from one file name to another inside the same directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    /// Current file name
    pub from: String,
    /// New file name
    pub to: String,
}

impl RenameRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        RenameRecord {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether the file already carries its new name
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for RenameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// The complete, ordered set of renames for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    records: Vec<RenameRecord>,
    start_number: u64,
    width: usize,
}

impl RenamePlan {
    /// Every planned record in sorted candidate order, no-ops included
    pub fn records(&self) -> &[RenameRecord] {
        &self.records
    }

    /// Records that actually change a file name
    pub fn renames(&self) -> impl Iterator<Item = &RenameRecord> {
        self.records.iter().filter(|record| !record.is_noop())
    }

    /// Number of candidates that already carry their new name
    pub fn noop_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_noop()).count()
    }

    /// Number given to the first candidate
    pub fn start_number(&self) -> u64 {
        self.start_number
    }

    /// Digit count used for every prefix in this plan
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Number of decimal digits needed to print `number`
pub fn digit_count(number: u64) -> usize {
    number.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Width of every prefix when numbering ends at `final_number`
pub fn prefix_width(final_number: u64) -> usize {
    MIN_PREFIX_WIDTH.max(digit_count(final_number))
}

/// Builds the rename plan for the given candidates
///
/// Candidates are stably sorted by base name and numbered consecutively
/// starting right above `highest_prefix`. All prefixes share one width,
/// determined by the highest number handed out.
///
/// # Arguments
/// * `candidates` - Files taking part in this invocation
/// * `highest_prefix` - Largest prefix already present (0 when forcing)
///
/// # Errors
/// Returns an error if the numbering does not fit into u64
pub fn build_plan(mut candidates: Vec<Candidate>, highest_prefix: u64) -> Result<RenamePlan> {
    candidates.sort_by(|a, b| compare_base_names(&a.base_name, &b.base_name));

    let overflow = |candidates: &[Candidate]| {
        let name = candidates.last().map_or("", |c| c.name.as_str());
        prefix_overflow_error(name)
    };

    let start_number = highest_prefix
        .checked_add(1)
        .ok_or_else(|| overflow(&candidates))?;
    let final_number = highest_prefix
        .checked_add(candidates.len() as u64)
        .ok_or_else(|| overflow(&candidates))?;
    let width = prefix_width(final_number);

    debug!(
        "Numbering {} files from {start_number} to {final_number} with width {width}",
        candidates.len()
    );

    let records = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let number = start_number + index as u64;
            let new_name = format_prefixed(number, width, &candidate.base_name);
            let record = RenameRecord::new(candidate.name, new_name);
            trace!("Planned {record}");
            record
        })
        .collect();

    Ok(RenamePlan {
        records,
        start_number,
        width,
    })
}
