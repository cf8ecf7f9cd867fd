use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use analytics_log_core::{Collection, Record, format_ts};
use analytics_log_storage::DocumentStore;
use chrono::Utc;
use serde_json::{Map, Value};

use crate::ServiceError;

/// Append and list operations over the three collections.
///
/// Every call reads the whole document; appends write it back in full. A
/// per-service mutex serializes those cycles so requests handled concurrently
/// in this process cannot overwrite each other's records. Separate processes
/// sharing the same file still race.
pub struct CollectionService {
    store: Arc<dyn DocumentStore>,
    io_lock: Mutex<()>,
}

impl CollectionService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store, io_lock: Mutex::new(()) }
    }

    pub fn ensure_storage(&self) -> Result<(), ServiceError> {
        let _guard = self.lock();
        Ok(self.store.ensure_storage()?)
    }

    /// Stamps `fields` with a fresh `id` and `ts`, appends the record to
    /// `collection_name`, and persists the document.
    pub fn append_record(
        &self,
        collection_name: &str,
        fields: Map<String, Value>,
    ) -> Result<Record, ServiceError> {
        let collection: Collection = collection_name.parse()?;

        let _guard = self.lock();
        let mut doc = self.store.read_document()?;
        let now = Utc::now();
        let records = doc.records_mut(collection);
        let id = next_id(collection, records, now.timestamp_millis());
        let record = Record::new(id, format_ts(now), fields);
        records.push(record.clone().into());
        self.store.write_document(&doc)?;

        tracing::debug!(collection = %collection, id = %record.id, "appended record");
        Ok(record)
    }

    /// Returns the collection in insertion order, entries exactly as stored;
    /// unknown names yield an empty list.
    pub fn list_records(&self, collection_name: &str) -> Result<Vec<Value>, ServiceError> {
        let Ok(collection) = collection_name.parse::<Collection>() else {
            tracing::debug!(collection = collection_name, "listing unknown collection");
            return Ok(Vec::new());
        };

        let _guard = self.lock();
        let mut doc = self.store.read_document()?;
        Ok(std::mem::take(doc.records_mut(collection)))
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.io_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `<collection>-<n>` where `n` is the current Unix millis, raised past the
/// largest numeric suffix already present so ids never repeat. Entries
/// without a string id of that shape are skipped.
fn next_id(collection: Collection, existing: &[Value], now_millis: i64) -> String {
    let prefix = format!("{collection}-");
    let floor = existing
        .iter()
        .filter_map(|r| r.get("id")?.as_str()?.strip_prefix(&prefix)?.parse::<i64>().ok())
        .max()
        .map_or(i64::MIN, |last| last.saturating_add(1));
    format!("{prefix}{}", now_millis.max(floor))
}
