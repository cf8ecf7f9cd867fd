use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys owned by the server; never taken from caller-supplied fields.
pub const RESERVED_KEYS: [&str; 2] = ["id", "ts"];

/// A freshly created entry.
///
/// On the wire a record is a flat JSON object: `id` and `ts` followed by the
/// collection's own fields in the order they were given, values stored exactly
/// as received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub ts: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(id: String, ts: String, fields: Map<String, Value>) -> Self {
        let fields = fields
            .into_iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .collect();
        Self { id, ts, fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        let mut object = Map::with_capacity(record.fields.len() + RESERVED_KEYS.len());
        object.insert("id".to_owned(), Value::String(record.id));
        object.insert("ts".to_owned(), Value::String(record.ts));
        object.extend(record.fields);
        Self::Object(object)
    }
}

/// Formats a record timestamp as RFC 3339 UTC with millisecond precision.
#[must_use]
pub fn format_ts(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
