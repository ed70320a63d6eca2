//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the configuration folder that holds log files.
pub const APPLICATION: &str = "file_renumber";

/// Name of the command-line executable
pub const BINARY_NAME: &str = "frenum";

/// Separator placed between the numeric prefix and the base name
pub const PREFIX_SEPARATOR: char = '_';

/// Minimum number of digits in a generated prefix
pub const MIN_PREFIX_WIDTH: usize = 2;

/// Usage line printed when no directory is supplied
pub const USAGE: &str = "Usage: frenum <directory> [--force] [--skip .ext1,.ext2]";

/// Help text for the directory argument
pub const DIRECTORY_HELP: &str = "Directory whose files should be renumbered";

/// Help text for the force command-line option
pub const FORCE_HELP: &str = "Strip existing prefixes and renumber every file from 1";

/// Help text for the skip command-line option
pub const SKIP_HELP: &str = "Comma separated list of extensions to leave alone (e.g. .log,.tmp)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Show the planned renames without renaming any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Place the log file relative to the current directory instead of the config folder";
