use crate::directory::DirectoryIterator;
use crate::error::DirIterError;
use crate::lister::RawLister;
use crate::options::{DirIterOptions, Traversal};
use crate::siblings::SiblingsFirstRecursiveIterator;
use crate::simple::SimpleRecursiveIterator;
use crate::sorted::SortedDirectoryIterator;
use crate::types::DirEntry;
use std::iter::FusedIterator;
use std::sync::Arc;

/// The iterator chosen by [`DirIterOptions::traversal`].
#[derive(Debug)]
pub enum Walk {
    Flat(DirectoryIterator),
    Sorted(SortedDirectoryIterator),
    DepthFirst(SimpleRecursiveIterator),
    SiblingsFirst(SiblingsFirstRecursiveIterator),
}

impl Walk {
    pub fn current(&self) -> Option<&DirEntry> {
        match self {
            Walk::Flat(it) => it.current(),
            Walk::Sorted(it) => it.current(),
            Walk::DepthFirst(it) => it.current(),
            Walk::SiblingsFirst(it) => it.current(),
        }
    }

    /// Moves to the next entry. Only the recursive traversals can fail here;
    /// see [`SimpleRecursiveIterator::advance`].
    pub fn advance(&mut self) -> Result<(), DirIterError> {
        match self {
            Walk::Flat(it) => it.advance(),
            Walk::Sorted(it) => it.advance(),
            Walk::DepthFirst(it) => return it.advance(),
            Walk::SiblingsFirst(it) => return it.advance(),
        }
        Ok(())
    }

    pub fn is_end(&self) -> bool {
        match self {
            Walk::Flat(it) => it.is_end(),
            Walk::Sorted(it) => it.is_end(),
            Walk::DepthFirst(it) => it.is_end(),
            Walk::SiblingsFirst(it) => it.is_end(),
        }
    }
}

impl Iterator for Walk {
    type Item = Result<DirEntry, DirIterError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Walk::Flat(it) => it.next().map(Ok),
            Walk::Sorted(it) => it.next().map(Ok),
            Walk::DepthFirst(it) => it.next(),
            Walk::SiblingsFirst(it) => it.next(),
        }
    }
}

impl FusedIterator for Walk {}

/// Opens the traversal described by `options` on the local file system.
pub fn walk(options: &DirIterOptions) -> Result<Walk, DirIterError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Starting {:?} walk at {}",
        options.traversal,
        options.root.display()
    );
    let walk = match options.traversal {
        Traversal::Flat => Walk::Flat(DirectoryIterator::from_options(options)?),
        Traversal::Sorted => Walk::Sorted(SortedDirectoryIterator::from_options(options)?),
        Traversal::DepthFirst => Walk::DepthFirst(SimpleRecursiveIterator::from_options(options)?),
        Traversal::SiblingsFirst => {
            Walk::SiblingsFirst(SiblingsFirstRecursiveIterator::from_options(options)?)
        }
    };
    Ok(walk)
}

/// Like [`walk`], listing directories through `lister`.
pub fn walk_with_lister(
    options: &DirIterOptions,
    lister: Arc<dyn RawLister>,
) -> Result<Walk, DirIterError> {
    let walk = match options.traversal {
        Traversal::Flat => Walk::Flat(DirectoryIterator::with_lister(options, lister)?),
        Traversal::Sorted => Walk::Sorted(SortedDirectoryIterator::with_lister(options, lister)?),
        Traversal::DepthFirst => {
            Walk::DepthFirst(SimpleRecursiveIterator::with_lister(options, lister)?)
        }
        Traversal::SiblingsFirst => {
            Walk::SiblingsFirst(SiblingsFirstRecursiveIterator::with_lister(options, lister)?)
        }
    };
    Ok(walk)
}

/// Runs a whole walk, stopping at the first error.
pub fn collect_entries(options: &DirIterOptions) -> Result<Vec<DirEntry>, DirIterError> {
    walk(options)?.collect()
}
