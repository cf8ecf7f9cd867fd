//! Typed error enum for the storage layer.

use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Directory creation, read, or write failed (permissions, disk full, ...).
    #[error("storage I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted content is not a well-formed document.
    #[error("storage corrupt at {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Whether the stored file exists but could not be parsed.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
