use crate::context::Context;
use crate::error::DirIterError;
use crate::level::Level;
use crate::lister::RawLister;
use crate::options::{DirIterBuilder, DirIterOptions};
use crate::types::DirEntry;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An open directory plus the subdirectories seen in it that are still
/// waiting to be entered.
#[derive(Debug, Clone, PartialEq)]
struct Frame {
    level: Level,
    pending: VecDeque<DirEntry>,
}

impl Frame {
    fn new(level: Level) -> Self {
        Self {
            level,
            pending: VecDeque::new(),
        }
    }
}

/// Recursive traversal that yields every entry of a directory before
/// entering any of its subdirectories.
///
/// Subdirectories are queued in the order they are yielded. Once a
/// directory's own entries are used up, the first queued subdirectory is
/// opened and drained completely, including everything below it, before the
/// next queued one is opened.
///
/// # Errors during traversal
///
/// A subdirectory is only opened once the level that listed it is
/// exhausted, so a failure to open it surfaces after the rest of that
/// level has been yielded, not right after the directory entry itself.
/// [`advance`](Self::advance) then returns the error and the iterator is
/// left at end; through [`Iterator::next`] the error is the item after the
/// level's last entry, and the iterator then stops.
#[derive(Debug, Default)]
pub struct SiblingsFirstRecursiveIterator {
    context: Context,
    stack: Vec<Frame>,
    failed: Option<DirIterError>,
}

impl SiblingsFirstRecursiveIterator {
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
            stack: vec![Frame::new(level)],
            failed: None,
        };
        if it.context.yields_nothing() {
            it.stack.clear();
        }
        it.settle()?;
        Ok(it)
    }

    pub fn current(&self) -> Option<&DirEntry> {
        self.stack.last().and_then(|frame| frame.level.current())
    }

    /// Depth of the current entry; 0 at end.
    pub fn depth(&self) -> usize {
        self.current().map_or(0, |entry| entry.depth)
    }

    /// Moves to the next entry. Does nothing once at end.
    pub fn advance(&mut self) -> Result<(), DirIterError> {
        let context = &self.context;
        let Some(frame) = self.stack.last_mut() else {
            return Ok(());
        };
        if let Some(entry) = frame.level.current().filter(|e| context.may_descend(e)) {
            let entry = entry.clone();
            frame.pending.push_back(entry);
        }
        frame.level.advance();
        self.settle()
    }

    pub fn is_end(&self) -> bool {
        self.stack.is_empty()
    }

    /// Restores the invariant that the top frame has a current entry:
    /// opens queued subdirectories of an exhausted frame, skipping empty
    /// ones, and pops frames with nothing left.
    fn settle(&mut self) -> Result<(), DirIterError> {
        while let Some(frame) = self.stack.last_mut() {
            if !frame.level.is_end() {
                break;
            }
            let Some(dir) = frame.pending.pop_front() else {
                self.stack.pop();
                continue;
            };
            match Level::open(&self.context, &dir.path, dir.depth + 1) {
                Ok(level) if level.is_end() => {}
                Ok(level) => {
                    #[cfg(feature = "logging")]
                    tracing::trace!("Descending into {}", dir.path.display());
                    self.stack.push(Frame::new(level));
                }
                Err(e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Cannot descend into {}: {}", dir.path.display(), e);
                    self.stack.clear();
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

impl PartialEq for SiblingsFirstRecursiveIterator {
    fn eq(&self, other: &Self) -> bool {
        self.stack == other.stack
    }
}

impl Iterator for SiblingsFirstRecursiveIterator {
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

impl FusedIterator for SiblingsFirstRecursiveIterator {}
