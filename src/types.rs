use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// One record produced by a [`RawLister`](crate::RawLister): the bare name of
/// an entry and whether it is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub is_dir: bool,
}

impl RawEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// A single entry yielded by one of the directory iterators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// The full path to the entry: the traversal root joined with every
    /// directory segment leading to it.
    pub path: PathBuf,
    /// Whether the lister reported the entry as a directory.
    pub is_dir: bool,
    /// Distance from the traversal root. Direct children of the root are at
    /// depth 1.
    pub depth: usize,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final segment of the entry's path.
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }
}
