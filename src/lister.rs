use crate::error::DirIterError;
use crate::types::RawEntry;
use std::fs;
use std::path::Path;

/// Produces the immediate entries of a single directory.
///
/// This is the only point where the iterators touch the file system.
/// Implement it to traverse something other than the local disk, or to
/// inject failures in tests.
///
/// Entries may come back in any order; ordering is the business of the
/// iterator built on top.
///
/// # Errors
///
/// Fail with [`DirIterError::NotFound`] when `dir` does not exist and with
/// [`DirIterError::NotADirectory`] when it is not a directory.
pub trait RawLister: Send + Sync {
    fn list(&self, dir: &Path) -> Result<Vec<RawEntry>, DirIterError>;
}

/// [`RawLister`] backed by [`std::fs::read_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister {
    follow_links: bool,
}

impl FsLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report symlinks to directories as directories.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }
}

impl RawLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<RawEntry>, DirIterError> {
        let metadata = fs::metadata(dir).map_err(|e| DirIterError::io(dir, e))?;
        if !metadata.is_dir() {
            return Err(DirIterError::not_a_directory(dir));
        }
        let read_dir = fs::read_dir(dir).map_err(|e| DirIterError::io(dir, e))?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| DirIterError::io(dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| DirIterError::io(entry.path(), e))?;
            let is_dir = if file_type.is_symlink() && self.follow_links {
                // A dangling link is listed as a plain entry.
                fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
            } else {
                file_type.is_dir()
            };
            entries.push(RawEntry {
                name: entry.file_name(),
                is_dir,
            });
        }
        Ok(entries)
    }
}
