//! Content loading errors.

use std::path::{Path, PathBuf};

/// Failure while reading the content collection.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A directory or file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The YAML front matter of a file is malformed.
    #[error("Invalid front matter in {}: {message}", path.display())]
    FrontMatter {
        /// File with the bad front matter.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl ContentError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
