//! File catalog and bundle error types.

use std::path::PathBuf;

/// Errors from walking the project or writing the bundle.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The project root is missing or not a directory.
    #[error("project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
