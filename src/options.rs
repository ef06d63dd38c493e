use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// Which iterator [`walk`](crate::walk) builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    Flat,
    Sorted,
    #[default]
    DepthFirst,
    SiblingsFirst,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirIterOptions {
    pub root: PathBuf,
    pub traversal: Traversal,
    pub sorted: bool,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
}
impl Default for DirIterOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            traversal: Traversal::default(),
            sorted: false,
            max_depth: None,
            follow_links: false,
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct DirIterBuilder {
    options: DirIterOptions,
}
impl DirIterBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DirIterOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Starts from previously loaded options, e.g. a deserialized config file.
    pub fn from_options(options: DirIterOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.options.traversal = traversal;
        self
    }
    /// List every level of a recursive traversal in sorted order.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.options.sorted = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> DirIterOptions {
        self.options
    }
}
