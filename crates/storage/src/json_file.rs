use std::fs;
use std::path::{Path, PathBuf};

use analytics_log_core::Document;
use serde_json::{Map, Value};

use crate::error::StorageError;
use crate::traits::DocumentStore;

/// File name of the document inside the data directory.
pub const DB_FILE_NAME: &str = "db.json";

/// Document stored as pretty-printed JSON at `<data_dir>/db.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a handle; nothing touches the filesystem until first use.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let path = data_dir.join(DB_FILE_NAME);
        Self { data_dir, path }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn overwrite(&self, doc: &Document) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| StorageError::io(&self.path, std::io::Error::other(e)))?;
        fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))
    }
}

impl DocumentStore for JsonFileStore {
    fn ensure_storage(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::io(&self.data_dir, e))?;
        let exists = self.path.try_exists().map_err(|e| StorageError::io(&self.path, e))?;
        if !exists {
            tracing::info!(path = %self.path.display(), "creating empty document");
            self.overwrite(&Document::default())?;
        }
        Ok(())
    }

    fn read_document(&self) -> Result<Document, StorageError> {
        self.ensure_storage()?;
        let raw = fs::read(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let corrupt = |source| StorageError::Corrupt { path: self.path.clone(), source };
        // Top level must be an object; entries inside collections are taken as-is.
        let top: Map<String, Value> = serde_json::from_slice(&raw).map_err(corrupt)?;
        serde_json::from_value(Value::Object(top)).map_err(corrupt)
    }

    fn write_document(&self, doc: &Document) -> Result<(), StorageError> {
        self.ensure_storage()?;
        self.overwrite(doc)
    }
}
