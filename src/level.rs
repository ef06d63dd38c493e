//! One open directory inside a recursive traversal.

use crate::context::Context;
use crate::directory::DirectoryIterator;
use crate::error::DirIterError;
use crate::sorted::SortedDirectoryIterator;
use crate::types::DirEntry;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Level {
    Flat(DirectoryIterator),
    Sorted(SortedDirectoryIterator),
}

impl Level {
    pub(crate) fn open(context: &Context, dir: &Path, depth: usize) -> Result<Self, DirIterError> {
        if context.sorted {
            SortedDirectoryIterator::open(context, dir, depth).map(Level::Sorted)
        } else {
            DirectoryIterator::open(context, dir, depth).map(Level::Flat)
        }
    }

    pub(crate) fn current(&self) -> Option<&DirEntry> {
        match self {
            Level::Flat(it) => it.current(),
            Level::Sorted(it) => it.current(),
        }
    }

    pub(crate) fn advance(&mut self) {
        match self {
            Level::Flat(it) => it.advance(),
            Level::Sorted(it) => it.advance(),
        }
    }

    pub(crate) fn is_end(&self) -> bool {
        match self {
            Level::Flat(it) => it.is_end(),
            Level::Sorted(it) => it.is_end(),
        }
    }
}
