//! Common error types for lugia-pack.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Common error type for packaging operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Filesystem error at {}: {}", .path.display(), .source)]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing input: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O failure on `path`.
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O failure while reading a source input.
    ///
    /// A `NotFound` error becomes [`Error::MissingInput`]; anything else stays
    /// a filesystem error.
    pub fn input(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::MissingInput(path.to_path_buf())
        } else {
            Error::fs(path, source)
        }
    }

    /// Whether this error reports an absent source file or directory.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput(_))
    }
}
