//! Typed error enum for the service layer.

use analytics_log_core::UnknownCollectionError;
use analytics_log_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and collection-name failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Reading or writing the document failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Append was asked for a collection that does not exist.
    #[error(transparent)]
    UnknownCollection(#[from] UnknownCollectionError),
}

impl ServiceError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_corrupt())
    }
}
