use crate::context::Context;
use crate::directory::DirectoryIterator;
use crate::error::DirIterError;
use crate::lister::RawLister;
use crate::options::{DirIterBuilder, DirIterOptions};
use crate::types::DirEntry;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Like [`DirectoryIterator`], but replays the directory in a fixed order:
/// subdirectories first, then files, each group ascending by the bytes of
/// the file name. Comparison is ordinal, so `"1" < "A" < "a"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedDirectoryIterator {
    inner: DirectoryIterator,
}

impl SortedDirectoryIterator {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DirIterError> {
        Self::from_options(&DirIterBuilder::new(path).build())
    }

    pub fn from_options(options: &DirIterOptions) -> Result<Self, DirIterError> {
        DirectoryIterator::from_options(options).map(Self::from_flat)
    }

    pub fn with_lister(
        options: &DirIterOptions,
        lister: Arc<dyn RawLister>,
    ) -> Result<Self, DirIterError> {
        DirectoryIterator::with_lister(options, lister).map(Self::from_flat)
    }

    pub(crate) fn open(context: &Context, dir: &Path, depth: usize) -> Result<Self, DirIterError> {
        DirectoryIterator::open(context, dir, depth).map(Self::from_flat)
    }

    /// Buffers whatever `flat` has left and sorts it.
    pub fn from_flat(mut flat: DirectoryIterator) -> Self {
        flat.entries.make_contiguous().sort_by(compare_entries);
        Self { inner: flat }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn current(&self) -> Option<&DirEntry> {
        self.inner.current()
    }

    pub fn advance(&mut self) {
        self.inner.advance();
    }

    pub fn is_end(&self) -> bool {
        self.inner.is_end()
    }
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.is_dir.cmp(&a.is_dir).then_with(|| {
        a.file_name()
            .as_encoded_bytes()
            .cmp(b.file_name().as_encoded_bytes())
    })
}

impl Iterator for SortedDirectoryIterator {
    type Item = DirEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SortedDirectoryIterator {}

impl FusedIterator for SortedDirectoryIterator {}
