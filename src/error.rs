use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DirIterError {
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}
impl DirIterError {
    /// Classifies an I/O failure on `path` into the traversal error taxonomy.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => DirIterError::NotFound { path },
            io::ErrorKind::NotADirectory => DirIterError::NotADirectory { path },
            io::ErrorKind::PermissionDenied => DirIterError::PermissionDenied { path },
            _ => DirIterError::Io { path, source },
        }
    }
    pub(crate) fn not_a_directory(path: &Path) -> Self {
        DirIterError::NotADirectory {
            path: path.to_path_buf(),
        }
    }
    /// The path the error occurred at, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DirIterError::NotFound { path }
            | DirIterError::NotADirectory { path }
            | DirIterError::PermissionDenied { path }
            | DirIterError::Io { path, .. } => Some(path),
            DirIterError::InvalidPattern(_) => None,
        }
    }
}
