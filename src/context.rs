//! Traversal settings shared by every level of an iterator.

use crate::error::DirIterError;
use crate::lister::{FsLister, RawLister};
use crate::options::DirIterOptions;
use crate::types::DirEntry;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::VecDeque;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct Context {
    lister: Arc<dyn RawLister>,
    matcher: Option<Arc<GlobSet>>,
    pub(crate) sorted: bool,
    pub(crate) max_depth: Option<usize>,
}

impl Context {
    pub(crate) fn from_options(options: &DirIterOptions) -> Result<Self, DirIterError> {
        let lister = FsLister::new().follow_links(options.follow_links);
        Self::with_lister(options, Arc::new(lister))
    }

    pub(crate) fn with_lister(
        options: &DirIterOptions,
        lister: Arc<dyn RawLister>,
    ) -> Result<Self, DirIterError> {
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut builder = GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = Glob::new(pattern).map_err(|e| {
                    DirIterError::InvalidPattern(format!("'{}': {}", pattern, e))
                })?;
                builder.add(glob);
            }
            let set = builder
                .build()
                .map_err(|e| DirIterError::InvalidPattern(e.to_string()))?;
            Some(Arc::new(set))
        } else {
            None
        };
        Ok(Self {
            lister,
            matcher,
            sorted: options.sorted,
            max_depth: options.max_depth,
        })
    }

    /// Lists `dir` and resolves each record to a [`DirEntry`] at `depth`,
    /// dropping entries that match an ignore pattern.
    pub(crate) fn list(&self, dir: &Path, depth: usize) -> Result<VecDeque<DirEntry>, DirIterError> {
        let raw = self.lister.list(dir)?;
        let entries: VecDeque<DirEntry> = raw
            .into_iter()
            .map(|raw| DirEntry {
                path: dir.join(&raw.name),
                is_dir: raw.is_dir,
                depth,
            })
            .filter(|entry| !self.is_ignored(&entry.path))
            .collect();
        #[cfg(feature = "logging")]
        tracing::debug!("Listed {} ({} entries)", dir.display(), entries.len());
        Ok(entries)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(path))
    }

    /// Whether a recursive iterator should open `entry` as a new level.
    pub(crate) fn may_descend(&self, entry: &DirEntry) -> bool {
        entry.is_dir && self.max_depth.is_none_or(|max| entry.depth < max)
    }

    /// A depth limit of zero admits no entries at all.
    pub(crate) fn yields_nothing(&self) -> bool {
        self.max_depth == Some(0)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            lister: Arc::new(FsLister::new()),
            matcher: None,
            sorted: false,
            max_depth: None,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("ignore_patterns", &self.matcher.as_ref().map(|m| m.len()))
            .field("sorted", &self.sorted)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
