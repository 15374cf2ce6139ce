//! Directory entries and the scan primitive

use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// One child of a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
        }
    }

    /// Hidden-ness is the leading `.` of the name, nothing else.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// List the immediate children of `path` in scan order.
///
/// The directory handle is drained and closed before returning. Symlinks are
/// classified by their target; a dangling link counts as a file. Entries that
/// fail while iterating a readable directory are skipped.
pub fn scan_dir(path: &Path) -> Result<Vec<DirEntry>, ScanError> {
    let read_dir = std::fs::read_dir(path)?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };
        let entry_path = entry.path();
        let is_dir = entry_path.is_dir();
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry_path,
            is_dir,
        });
    }

    Ok(entries)
}
