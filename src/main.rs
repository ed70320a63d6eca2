use std::process::ExitCode;

use anyhow::Result;
use clap::ArgMatches;
use human_panic::setup_panic;
use log::{error, info, warn};

use file_renumber::cli::{get_directory, get_log_file, get_matches, get_options, get_verbosity};
use file_renumber::constants::USAGE;
use file_renumber::prelude::{Error, init_logger, renumber_directory};

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    if let Err(e) = init_logging(&matches) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let directory = match get_directory(&matches) {
        Ok(Some(directory)) => directory,
        Ok(None) => {
            error!("Error: Please provide a directory path.");
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting to process files in: {}", directory.display());

    match renumber_directory(&directory, &get_options(&matches)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(matches: &ArgMatches) -> Result<()> {
    let log_file = get_log_file(matches)?;
    init_logger(get_verbosity(matches), log_file.as_deref())
}

fn report_failure(error: &Error) {
    error!("An error occurred: {error}");

    if error.is_partial_failure() {
        warn!("These files were renamed before the error and keep their new names:");
        for record in error.completed_renames() {
            warn!("  {record}");
        }
    }
}
