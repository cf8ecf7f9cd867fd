use axum::{extract::State, http::StatusCode, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use analytics_log_core::{Collection, Record};

use crate::api_error::ApiError;
use crate::blocking::blocking_service;
use crate::body::JsonFields;
use crate::AppState;

pub async fn create_activity(
    State(state): State<Arc<AppState>>,
    JsonFields(body): JsonFields,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create_in(state, Collection::Activities, body).await
}

pub async fn list_activity(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    list_in(state, Collection::Activities).await
}

pub async fn create_search(
    State(state): State<Arc<AppState>>,
    JsonFields(body): JsonFields,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create_in(state, Collection::Searches, body).await
}

pub async fn list_searches(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    list_in(state, Collection::Searches).await
}

pub async fn create_learning(
    State(state): State<Arc<AppState>>,
    JsonFields(body): JsonFields,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create_in(state, Collection::Learnings, body).await
}

pub async fn list_learnings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    list_in(state, Collection::Learnings).await
}

async fn create_in(
    state: Arc<AppState>,
    collection: Collection,
    body: Map<String, Value>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let fields = pick_fields(collection, body);
    let record =
        blocking_service(move || state.collections.append_record(collection.as_str(), fields))
            .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_in(
    state: Arc<AppState>,
    collection: Collection,
) -> Result<Json<Vec<Value>>, ApiError> {
    blocking_service(move || state.collections.list_records(collection.as_str()))
        .await
        .map(Json)
}

/// Keeps only the collection's own fields. Absent fields stay absent; an
/// explicit `null` is kept.
fn pick_fields(collection: Collection, mut body: Map<String, Value>) -> Map<String, Value> {
    let mut fields = Map::new();
    for &name in collection.field_names() {
        if let Some(value) = body.remove(name) {
            fields.insert(name.to_owned(), value);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_pick_fields_drops_extras_and_reserved_keys() {
        let picked = pick_fields(
            Collection::Activities,
            body(json!({"type": "click", "id": "spoofed", "ts": "x", "extra": 1})),
        );
        assert_eq!(Value::Object(picked), json!({"type": "click"}));
    }

    #[test]
    fn test_pick_fields_keeps_explicit_null_and_any_type() {
        let picked = pick_fields(
            Collection::Searches,
            body(json!({"query": null, "resultsCount": "seven"})),
        );
        assert_eq!(Value::Object(picked), json!({"query": null, "resultsCount": "seven"}));
    }

    #[test]
    fn test_pick_fields_on_empty_body() {
        assert!(pick_fields(Collection::Learnings, Map::new()).is_empty());
    }
}
