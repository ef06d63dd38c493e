use crate::context::Context;
use crate::error::DirIterError;
use crate::level::Level;
use crate::lister::RawLister;
use crate::options::{DirIterBuilder, DirIterOptions};
use crate::types::DirEntry;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Depth-first, pre-order traversal of a directory tree.
///
/// When the current entry is a directory, the next position is the first
/// entry inside it; its remaining siblings come after the whole subtree.
///
/// Open directories are kept on an explicit stack, one [`Level`] per depth.
/// The top of the stack is never exhausted: an empty stack is the end state.
///
/// # Errors during traversal
///
/// If a subdirectory cannot be opened (for instance because it was removed
/// after being listed), [`advance`](Self::advance) returns the error and the
/// iterator is left at end. Through [`Iterator::next`] the error is yielded
/// after the directory entry that caused it, and the iterator then stops.
#[derive(Debug, Default)]
pub struct SimpleRecursiveIterator {
    context: Context,
    stack: Vec<Level>,
    failed: Option<DirIterError>,
}

impl SimpleRecursiveIterator {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DirIterError> {
        Self::from_options(&DirIterBuilder::new(root).build())
    }

    pub fn from_options(options: &DirIterOptions) -> Result<Self, DirIterError> {
        let context = Context::from_options(options)?;
        Self::start(context, &options.root)
    }

    pub fn with_lister(
        options: &DirIterOptions,
        lister: Arc<dyn RawLister>,
    ) -> Result<Self, DirIterError> {
        let context = Context::with_lister(options, lister)?;
        Self::start(context, &options.root)
    }

    fn start(context: Context, root: &Path) -> Result<Self, DirIterError> {
        let level = Level::open(&context, root, 1)?;
        let mut it = Self {
            context,
            stack: vec![level],
            failed: None,
        };
        if it.context.yields_nothing() {
            it.stack.clear();
        }
        it.unwind();
        Ok(it)
    }

    pub fn current(&self) -> Option<&DirEntry> {
        self.stack.last().and_then(Level::current)
    }

    /// Depth of the current entry; 0 at end.
    pub fn depth(&self) -> usize {
        self.current().map_or(0, |entry| entry.depth)
    }

    /// Moves to the next entry in pre-order. Does nothing once at end.
    pub fn advance(&mut self) -> Result<(), DirIterError> {
        let descend = match self.stack.last() {
            None => return Ok(()),
            Some(top) => top
                .current()
                .filter(|entry| self.context.may_descend(entry))
                .map(|entry| (entry.path.clone(), entry.depth + 1)),
        };
        match descend {
            Some((dir, depth)) => match Level::open(&self.context, &dir, depth) {
                Ok(level) => {
                    #[cfg(feature = "logging")]
                    tracing::trace!("Descending into {}", dir.display());
                    self.stack.push(level);
                }
                Err(e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Cannot descend into {}: {}", dir.display(), e);
                    self.stack.clear();
                    return Err(e);
                }
            },
            None => {
                if let Some(top) = self.stack.last_mut() {
                    top.advance();
                }
            }
        }
        self.unwind();
        Ok(())
    }

    pub fn is_end(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pops exhausted levels, stepping each parent past the directory that
    /// was just finished.
    fn unwind(&mut self) {
        while self.stack.last().is_some_and(Level::is_end) {
            self.stack.pop();
            if let Some(parent) = self.stack.last_mut() {
                parent.advance();
            }
        }
    }
}

impl PartialEq for SimpleRecursiveIterator {
    fn eq(&self, other: &Self) -> bool {
        self.stack == other.stack
    }
}

impl Iterator for SimpleRecursiveIterator {
    type Item = Result<DirEntry, DirIterError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.failed.take() {
            return Some(Err(err));
        }
        let entry = self.current()?.clone();
        if let Err(err) = self.advance() {
            self.failed = Some(err);
        }
        Some(Ok(entry))
    }
}

impl FusedIterator for SimpleRecursiveIterator {}
