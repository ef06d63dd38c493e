//! # diriter
//!
//! `diriter` provides a family of directory iterators with explicit position,
//! advance and end-of-sequence semantics:
//!
//! - [`DirectoryIterator`]: the entries of one directory, in listing order.
//! - [`SortedDirectoryIterator`]: the same entries, directories first, then
//!   files, each group in byte-ordinal name order.
//! - [`SimpleRecursiveIterator`]: depth-first, pre-order traversal of a tree.
//! - [`SiblingsFirstRecursiveIterator`]: yields all entries of a directory
//!   before entering any of its subdirectories.
//!
//! Every iterator can be driven by hand through `current()` / `advance()` and
//! compared against its `Default` value, the end sentinel, or used as a plain
//! [`Iterator`]. Directory listing goes through the [`RawLister`] trait;
//! [`FsLister`] is the `std::fs` implementation.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use diriter::{DirIterBuilder, Traversal, walk};
//!
//! let options = DirIterBuilder::new(".")
//!     .traversal(Traversal::SiblingsFirst)
//!     .sorted(true)
//!     .max_depth(3)
//!     .ignore_patterns(vec!["**/target".into()])
//!     .build();
//!
//! for entry in walk(&options).expect("Failed to open root") {
//!     let entry = entry.expect("Traversal failed");
//!     println!("{} (dir: {})", entry.path.display(), entry.is_dir);
//! }
//! ```

mod context;
mod directory;
mod error;
mod level;
mod lister;
mod options;
mod siblings;
mod simple;
mod sorted;
mod types;
mod walk;

pub use directory::DirectoryIterator;
pub use error::DirIterError;
pub use lister::{FsLister, RawLister};
pub use options::{DirIterBuilder, DirIterOptions, Traversal};
pub use siblings::SiblingsFirstRecursiveIterator;
pub use simple::SimpleRecursiveIterator;
pub use sorted::SortedDirectoryIterator;
pub use types::{DirEntry, RawEntry};
pub use walk::{Walk, collect_entries, walk, walk_with_lister};
