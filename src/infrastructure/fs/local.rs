//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::Path;

use crate::domain::ports::file_system::{DirEntryInfo, FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::from_io(e, path))? {
            let entry = entry.map_err(|e| FsError::from_io(e, path))?;
            let file_type = entry.file_type().map_err(|e| FsError::from_io(e, &entry.path()))?;
            entries.push(DirEntryInfo {
                name: entry.file_name().into_string().ok(),
                is_dir: file_type.is_dir(),
                path: entry.path(),
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }
}
