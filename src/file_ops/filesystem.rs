//! Filesystem capability
//!
//! The engine never touches `std::fs` directly. Everything it needs from the
//! filesystem goes through the [`FileSystem`] trait so that callers can
//! substitute their own implementation.

use std::ffi::OsString;
use std::fs::{metadata, read_dir, rename, symlink_metadata};
use std::io;
use std::path::Path;

/// The filesystem primitives required to renumber a directory
pub trait FileSystem {
    /// Lists the names of all entries directly inside `directory`
    fn list_directory(&self, directory: &Path) -> io::Result<Vec<OsString>>;

    /// Returns whether `path` refers to a regular file, following symlinks
    fn is_regular_file(&self, path: &Path) -> io::Result<bool>;

    /// Returns whether anything, including a dangling symlink, exists at `path`
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Renames `from` to `to`
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_directory(&self, directory: &Path) -> io::Result<Vec<OsString>> {
        read_dir(directory)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn is_regular_file(&self, path: &Path) -> io::Result<bool> {
        Ok(metadata(path)?.is_file())
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        match symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        rename(from, to)
    }
}
