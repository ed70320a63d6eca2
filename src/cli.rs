use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::constants::{
    BINARY_NAME, DIRECTORY_HELP, DRY_RUN_HELP, FORCE_HELP, LOCAL_LOGGING_HELP, LOG_FILE_HELP,
    SKIP_HELP, VERBOSE_HELP,
};
use crate::errors::Result;
use crate::logging::LogLevel;
use crate::utils::{log_file_in_project_folder, parse_extension_list, resolve_directory};
use crate::workflow::RenumberOptions;

/// Defines the command-line interface
///
/// Defines the following arguments:
/// - `directory`: Directory whose files should be renumbered
/// - `force`: Strip existing prefixes and renumber everything
/// - `skip`: Comma separated extensions to leave alone
/// - `dry`: Plan without renaming
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Optional log file and its location
pub fn build_command() -> Command {
    // The directory is checked by hand so that a missing one exits with 1
    let arg_directory = Arg::new("directory")
        .value_name("DIRECTORY")
        .help(DIRECTORY_HELP);

    let arg_force = Arg::new("force")
        .short('f')
        .long("force")
        .help(FORCE_HELP)
        .action(ArgAction::SetTrue);

    let arg_skip = Arg::new("skip")
        .short('s')
        .long("skip")
        .value_name("EXTENSIONS")
        .help(SKIP_HELP)
        .action(ArgAction::Append);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .requires("log_file")
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .bin_name(BINARY_NAME)
        .version(crate_version!())
        .arg(arg_directory)
        .arg(arg_force)
        .arg(arg_skip)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(log_file)
        .arg(log_locally)
}

/// Parses the arguments of the current process
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the target directory as an absolute path
///
/// # Returns
/// * `Result<Option<PathBuf>>` - `None` when no directory was supplied
///
/// # Errors
/// Returns an error if the supplied directory cannot be resolved
pub fn get_directory(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    matches
        .get_one::<String>("directory")
        .map(|directory| resolve_directory(directory))
        .transpose()
}

/// Translates the command-line flags into options for the engine
pub fn get_options(matches: &ArgMatches) -> RenumberOptions {
    let skip_extensions: Vec<String> = matches
        .get_many::<String>("skip")
        .into_iter()
        .flatten()
        .flat_map(|list| parse_extension_list(list))
        .collect();

    RenumberOptions::builder()
        .force(matches.get_flag("force"))
        .skip_extensions(skip_extensions)
        .dry_run(matches.get_flag("dry"))
        .build()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file location, if file logging was requested
///
/// Without `--log-locally` the file is placed in the application's
/// config folder.
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };
    let filename = PathBuf::from(filename);

    if matches.get_flag("log_locally") {
        Ok(Some(filename))
    } else {
        log_file_in_project_folder(&filename).map(Some)
    }
}
