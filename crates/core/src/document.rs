//! The whole persisted state: all three collections stored as one unit.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::Collection;

/// Full document as kept in `db.json`.
///
/// Stored entries are kept as raw JSON values so an entry this crate did not
/// write (missing `ts`, numeric `id`, ...) is listed and rewritten untouched.
/// Missing or `null` collections read as empty. Top-level keys this crate does
/// not know about are carried in `extra` so a rewrite does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub activities: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub searches: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub learnings: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn records(&self, collection: Collection) -> &[Value] {
        match collection {
            Collection::Activities => &self.activities,
            Collection::Searches => &self.searches,
            Collection::Learnings => &self.learnings,
        }
    }

    pub fn records_mut(&mut self, collection: Collection) -> &mut Vec<Value> {
        match collection {
            Collection::Activities => &mut self.activities,
            Collection::Searches => &mut self.searches,
            Collection::Learnings => &mut self.learnings,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use serde_json::json;

    #[test]
    fn test_empty_document_has_three_empty_arrays() {
        let value = serde_json::to_value(Document::default()).unwrap();
        assert_eq!(value, json!({"activities": [], "searches": [], "learnings": []}));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let doc: Document = serde_json::from_value(json!({"activities": []})).unwrap();
        assert!(doc.searches.is_empty());
        assert!(doc.learnings.is_empty());
    }

    #[test]
    fn test_null_collection_reads_as_empty() {
        let doc: Document =
            serde_json::from_value(json!({"activities": null, "learnings": []})).unwrap();
        assert!(doc.activities.is_empty());
    }

    #[test]
    fn test_irregular_entries_are_kept_verbatim() {
        let stored = json!({
            "activities": [
                {"id": "activities-1", "type": "x"},
                {"id": 42, "ts": "t"},
                "not even an object"
            ],
            "searches": [],
            "learnings": []
        });
        let doc: Document = serde_json::from_value(stored.clone()).unwrap();

        assert_eq!(doc.activities.len(), 3);
        assert_eq!(serde_json::to_value(&doc).unwrap(), stored);
    }

    #[test]
    fn test_unknown_top_level_keys_survive_rewrite() {
        let doc: Document =
            serde_json::from_value(json!({"learnings": [], "notes": {"keep": true}})).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["notes"], json!({"keep": true}));
    }

    #[test]
    fn test_records_mut_targets_named_collection() {
        let mut doc = Document::default();
        doc.records_mut(Collection::Searches)
            .push(Record::new("searches-1".to_owned(), "t".to_owned(), Map::new()).into());
        assert_eq!(doc.records(Collection::Searches).len(), 1);
        assert!(doc.records(Collection::Activities).is_empty());
    }

    #[test]
    fn test_collection_that_is_not_an_array_is_rejected() {
        let result = serde_json::from_value::<Document>(json!({"activities": {"id": "x"}}));
        assert!(result.is_err());
    }
}
