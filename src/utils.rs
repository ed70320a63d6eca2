use std::fs::create_dir_all;
use std::path::{Path, PathBuf, absolute};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, directory_access_error, generic_error, invalid_directory_error};

/// Resolves a directory argument to an absolute path
///
/// A leading `~` is expanded to the home directory. Relative paths are
/// resolved against the current working directory; the path does not need
/// to exist.
///
/// # Errors
/// * Returns an error if the argument is empty
/// * Returns an error if the current directory cannot be determined
pub fn resolve_directory(argument: &str) -> Result<PathBuf> {
    if argument.is_empty() {
        return Err(invalid_directory_error(PathBuf::from(argument)));
    }

    let expanded = PathBuf::from(tilde(argument).into_owned());
    absolute(&expanded).map_err(|e| directory_access_error(e, expanded))
}

/// Splits a comma separated extension list into trimmed, non-empty entries
///
/// # Examples
/// ```
/// use file_renumber::utils::parse_extension_list;
///
/// assert_eq!(parse_extension_list(".log, .tmp"), vec![".log", ".tmp"]);
/// ```
pub fn parse_extension_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|extension| !extension.is_empty())
        .map(str::to_string)
        .collect()
}

/// Places a log file name inside the application's config folder
pub(crate) fn log_file_in_project_folder(file_name: &Path) -> Result<PathBuf> {
    let folder = find_project_folder()?;
    Ok(folder.config_dir().join(file_name))
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())
            .map_err(|e| directory_access_error(e, folder.config_dir().to_path_buf()))?;
    }
    Ok(folder)
}
