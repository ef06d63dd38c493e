use crate::context::Context;
use crate::error::DirIterError;
use crate::lister::RawLister;
use crate::options::{DirIterBuilder, DirIterOptions};
use crate::types::DirEntry;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Iterates over the immediate entries of one directory, in whatever order
/// the [`RawLister`] returns them.
///
/// The directory is listed eagerly on construction. [`Default`] gives the
/// end sentinel; an iterator compares equal to it once every entry has been
/// consumed.
///
/// ```no_run
/// use diriter::DirectoryIterator;
///
/// let mut it = DirectoryIterator::new(".")?;
/// while let Some(entry) = it.current() {
///     println!("{}", entry.path().display());
///     it.advance();
/// }
/// assert_eq!(it, DirectoryIterator::default());
/// # Ok::<(), diriter::DirIterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryIterator {
    dir: PathBuf,
    pub(crate) entries: VecDeque<DirEntry>,
}

impl DirectoryIterator {
    /// Lists `path` with the default file system lister.
    ///
    /// # Errors
    ///
    /// [`DirIterError::NotFound`] or [`DirIterError::NotADirectory`] when
    /// `path` cannot be listed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DirIterError> {
        Self::from_options(&DirIterBuilder::new(path).build())
    }

    pub fn from_options(options: &DirIterOptions) -> Result<Self, DirIterError> {
        let context = Context::from_options(options)?;
        Self::open_root(&context, &options.root)
    }

    pub fn with_lister(
        options: &DirIterOptions,
        lister: Arc<dyn RawLister>,
    ) -> Result<Self, DirIterError> {
        let context = Context::with_lister(options, lister)?;
        Self::open_root(&context, &options.root)
    }

    fn open_root(context: &Context, root: &Path) -> Result<Self, DirIterError> {
        let mut it = Self::open(context, root, 1)?;
        if context.yields_nothing() {
            it.entries.clear();
        }
        Ok(it)
    }

    pub(crate) fn open(context: &Context, dir: &Path, depth: usize) -> Result<Self, DirIterError> {
        Ok(Self {
            dir: dir.to_path_buf(),
            entries: context.list(dir, depth)?,
        })
    }

    /// The directory being listed.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// The entry at the current position, or `None` at end.
    pub fn current(&self) -> Option<&DirEntry> {
        self.entries.front()
    }

    /// Moves to the next entry. Does nothing once at end.
    pub fn advance(&mut self) {
        self.entries.pop_front();
    }

    pub fn is_end(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for DirectoryIterator {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => self.dir == other.dir && self.entries == other.entries,
            _ => false,
        }
    }
}

impl Iterator for DirectoryIterator {
    type Item = DirEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.entries.len(), Some(self.entries.len()))
    }
}

impl ExactSizeIterator for DirectoryIterator {}

impl FusedIterator for DirectoryIterator {}
