//! File-system access behind a trait.
//! The compilation engine only ever touches the disk through [`FileSystem`],
//! which lets tests run the engine against scripted fakes.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Minimal stat result: everything the engine needs to know about a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub is_directory: bool,
}

/// Kind of a directory entry or template entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of a directory.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// File-system operations consumed by discovery and compilation.
pub trait FileSystem {
    /// Returns `None` when the path does not exist.
    fn stat(&self, path: &Path) -> Option<Stat>;

    /// Immediate entries of a directory. An unreadable or missing directory
    /// yields an empty list, not an error.
    fn read_dir(&self, path: &Path) -> Vec<DirEntry>;

    fn read_file(&self, path: &Path) -> Result<String>;

    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    fn create_dir(&self, path: &Path) -> Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn stat(&self, path: &Path) -> Option<Stat> {
        fs::metadata(path).ok().map(|meta| Stat {
            is_directory: meta.is_dir(),
        })
    }

    fn read_dir(&self, path: &Path) -> Vec<DirEntry> {
        let Ok(entries) = fs::read_dir(path) else {
            return Vec::new();
        };
        let mut result = Vec::new();
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            result.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        // std::fs::read_dir order is platform-dependent; sorted for a
        // deterministic walk
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(Error::Io)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::Io)?;
        }
        fs::write(path, content).map_err(Error::Io)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(Error::Io)
    }
}
