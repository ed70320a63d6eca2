//! In-memory filesystem used to inject failures in unit tests

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    File,
    Directory,
}

/// A single flat directory held in memory
#[derive(Debug)]
pub(crate) struct MemoryFileSystem {
    root: PathBuf,
    entries: RefCell<BTreeMap<OsString, EntryKind>>,
    failing_stats: HashSet<OsString>,
    failing_renames: HashSet<OsString>,
    rename_calls: RefCell<Vec<(String, String)>>,
}

impl MemoryFileSystem {
    pub(crate) fn new(root: &str) -> Self {
        MemoryFileSystem {
            root: PathBuf::from(root),
            entries: RefCell::new(BTreeMap::new()),
            failing_stats: HashSet::new(),
            failing_renames: HashSet::new(),
            rename_calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn with_files(self, names: &[&str]) -> Self {
        for name in names {
            self.entries
                .borrow_mut()
                .insert(OsString::from(name), EntryKind::File);
        }
        self
    }

    pub(crate) fn with_entry(self, name: impl Into<OsString>, kind: EntryKind) -> Self {
        self.entries.borrow_mut().insert(name.into(), kind);
        self
    }

    pub(crate) fn failing_stat(mut self, name: &str) -> Self {
        self.failing_stats.insert(OsString::from(name));
        self
    }

    pub(crate) fn failing_rename(mut self, name: &str) -> Self {
        self.failing_renames.insert(OsString::from(name));
        self
    }

    /// Creates an entry behind the engine's back, like a concurrent process would
    pub(crate) fn add_file(&self, name: &str) {
        self.entries
            .borrow_mut()
            .insert(OsString::from(name), EntryKind::File);
    }

    /// Sorted names currently present
    pub(crate) fn names(&self) -> Vec<String> {
        self.entries
            .borrow()
            .keys()
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    pub(crate) fn rename_calls(&self) -> Vec<(String, String)> {
        self.rename_calls.borrow().clone()
    }

    fn entry_name(&self, path: &Path) -> io::Result<OsString> {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) if parent == self.root => Ok(name.to_os_string()),
            _ => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is outside the directory", path.display()),
            )),
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_directory(&self, directory: &Path) -> io::Result<Vec<OsString>> {
        if directory != self.root {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        // Reverse order so callers cannot rely on a sorted listing
        Ok(self.entries.borrow().keys().rev().cloned().collect())
    }

    fn is_regular_file(&self, path: &Path) -> io::Result<bool> {
        let name = self.entry_name(path)?;
        if self.failing_stats.contains(&name) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "vanished"));
        }
        match self.entries.borrow().get(&name) {
            Some(kind) => Ok(*kind == EntryKind::File),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        let name = self.entry_name(path)?;
        Ok(self.entries.borrow().contains_key(&name))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let from_name = self.entry_name(from)?;
        let to_name = self.entry_name(to)?;
        if self.failing_renames.contains(&from_name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }

        let mut entries = self.entries.borrow_mut();
        let kind = entries
            .remove(&from_name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;
        entries.insert(to_name.clone(), kind);

        self.rename_calls.borrow_mut().push((
            from_name.to_string_lossy().into_owned(),
            to_name.to_string_lossy().into_owned(),
        ));
        Ok(())
    }
}
