//! Extension extraction
//!
//! Extensions always include their leading dot and are lowercased, so that
//! they can be compared directly against the configured skip list.

/// Returns the lowercased extension of a file name, including the dot
///
/// The extension starts at the last `.` of the name. A name without a dot,
/// a name whose only dot is its first character (`.bashrc`) and `..` have
/// no extension and yield an empty string.
///
/// # Examples
/// ```
/// use file_renumber::naming::extension_of;
///
/// assert_eq!(extension_of("photo.JPG"), ".jpg");
/// assert_eq!(extension_of("archive.tar.gz"), ".gz");
/// assert_eq!(extension_of(".bashrc"), "");
/// assert_eq!(extension_of("README"), "");
/// ```
pub fn extension_of(name: &str) -> String {
    if name == ".." {
        return String::new();
    }
    match name.rfind('.') {
        Some(0) | None => String::new(),
        Some(index) => name[index..].to_lowercase(),
    }
}
