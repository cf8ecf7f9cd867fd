use analytics_log_core::Document;

use crate::error::StorageError;

/// Whole-document access to the persisted store.
pub trait DocumentStore: Send + Sync {
    /// Create the storage location and an empty document if absent. Idempotent.
    fn ensure_storage(&self) -> Result<(), StorageError>;

    /// Read and parse the full current document.
    fn read_document(&self) -> Result<Document, StorageError>;

    /// Serialize `doc` and overwrite the stored document in full.
    fn write_document(&self, doc: &Document) -> Result<(), StorageError>;
}
