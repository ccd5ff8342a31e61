//! Error types for tree building and navigation.

use std::path::PathBuf;

/// Error returned when a documentation tree cannot be built.
///
/// Every variant is fatal for the build that produced it: no partial tree
/// is returned.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// File path has no base name, or its base name contains a space.
    #[error("Invalid file name (missing base name or contains spaces): {}", .path.display())]
    InvalidFileName {
        /// Offending path.
        path: PathBuf,
    },
    /// Root path exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Node identifier could not be parsed.
    #[error("Invalid node id: {0}")]
    InvalidId(String),
    /// I/O error while enumerating the source directory.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read when the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error returned when navigation cannot be derived for a file.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// File is not contained anywhere under the root directory.
    #[error("File not under root: {} (root: {})", .file.display(), .root.display())]
    NotUnderRoot {
        /// File that was looked up.
        file: PathBuf,
        /// Root it was expected under.
        root: PathBuf,
    },
}
