//! Numeric prefix recognition
//!
//! A prefix is a leading run of ASCII digits immediately followed by an
//! underscore, e.g. `02_` in `02_report.txt`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::PREFIX_SEPARATOR;

static PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)_").expect("Failed to compile regex pattern for PREFIX_PATTERN")
});

/// A file name split into its optional numeric prefix and its base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Whether the name starts with a numeric prefix
    pub has_prefix: bool,
    /// Value of the prefix; `None` when there is no prefix or it does not fit into u64
    pub prefix_value: Option<u64>,
    /// The name with the prefix removed, or the full name when there is none
    pub base_name: String,
}

impl ParsedName {
    /// Parses a file name into prefix and base name
    ///
    /// # Examples
    /// ```
    /// use file_renumber::naming::ParsedName;
    ///
    /// let parsed = ParsedName::parse("10_z-file.txt");
    /// assert!(parsed.has_prefix);
    /// assert_eq!(parsed.prefix_value, Some(10));
    /// assert_eq!(parsed.base_name, "z-file.txt");
    /// ```
    pub fn parse(name: &str) -> ParsedName {
        match PREFIX_PATTERN.captures(name) {
            Some(captures) => {
                let whole = captures.get(0).map_or(0, |m| m.end());
                let prefix_value = captures
                    .get(1)
                    .and_then(|digits| digits.as_str().parse::<u64>().ok());
                ParsedName {
                    has_prefix: true,
                    prefix_value,
                    base_name: name[whole..].to_string(),
                }
            }
            None => ParsedName {
                has_prefix: false,
                prefix_value: None,
                base_name: name.to_string(),
            },
        }
    }
}

/// Checks whether a name starts with a numeric prefix
pub fn has_prefix(name: &str) -> bool {
    PREFIX_PATTERN.is_match(name)
}

/// Removes a leading numeric prefix from a name, if present
pub fn strip_prefix(name: &str) -> &str {
    match PREFIX_PATTERN.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Builds `<zero padded number>_<base name>`
pub fn format_prefixed(number: u64, width: usize, base_name: &str) -> String {
    format!("{number:0width$}{PREFIX_SEPARATOR}{base_name}")
}
