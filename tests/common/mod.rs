#![allow(dead_code)]
use diriter::{DirEntry, DirIterError, RawEntry, RawLister};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FILES: [&str; 6] = ["b", "1", "A", "2", "B", "a"];

/// Builds:
///
/// ```text
/// tree
/// |-- 1 2 A B a b
/// `-- first
///     |-- 1 2 A B a b
///     `-- second
///         `-- 1 2 A B a b
/// ```
///
/// 2 directories, 18 files.
pub fn setup_tree() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let mut p = dir.path().join("tree");
    create_subdir(&p);
    p.push("first");
    create_subdir(&p);
    p.push("second");
    create_subdir(&p);
    let root = dir.path().join("tree");
    (dir, root)
}

pub fn create_subdir(p: &Path) {
    fs::create_dir_all(p).unwrap();
    for name in FILES {
        File::create(p.join(name)).unwrap();
    }
}

/// Paths relative to `root`, `/`-separated.
pub fn relative(root: &Path, entries: &[DirEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            e.path
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

pub fn names(entries: &[DirEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
}

/// In-memory lister; any path it does not know is reported as missing.
#[derive(Default)]
pub struct MemoryLister {
    dirs: HashMap<PathBuf, Vec<RawEntry>>,
}

impl MemoryLister {
    pub fn dir(mut self, path: &str, entries: Vec<RawEntry>) -> Self {
        self.dirs.insert(PathBuf::from(path), entries);
        self
    }
}

impl RawLister for MemoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<RawEntry>, DirIterError> {
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| DirIterError::NotFound {
                path: dir.to_path_buf(),
            })
    }
}
