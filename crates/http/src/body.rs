//! Permissive JSON body extraction.
//!
//! Unlike `axum::Json`, a missing body or one that is not `application/json`
//! is not an error: it reads as an empty object. A JSON array also reads as an
//! empty object. A JSON body that does not parse, or whose top level is a bare
//! string, number, boolean, or `null`, is rejected with 400.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::api_error::ApiError;

/// Top-level fields of a JSON request body.
#[derive(Debug, Default)]
pub struct JsonFields(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self::default());
        }

        let bytes = Bytes::from_request(req, state).await.map_err(IntoResponse::into_response)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(Value::Array(_)) => Ok(Self::default()),
            Ok(_) => Err(ApiError::BadRequest(
                "JSON body must be an object or an array".to_owned(),
            )
            .into_response()),
            Err(e) => {
                Err(ApiError::BadRequest(format!("malformed JSON body: {e}")).into_response())
            },
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_plain_json_content_type() {
        assert!(has_json_content_type(&headers("application/json")));
    }

    #[test]
    fn test_json_content_type_with_charset() {
        assert!(has_json_content_type(&headers("Application/JSON; charset=utf-8")));
    }

    #[test]
    fn test_structured_json_suffix_is_not_parsed() {
        assert!(!has_json_content_type(&headers("application/vnd.api+json")));
    }

    #[test]
    fn test_other_content_types_are_ignored() {
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&headers("application/x-www-form-urlencoded")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }
}
