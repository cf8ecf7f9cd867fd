//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use analytics_log_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message to
/// the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: body claimed to be JSON but did not parse.
    BadRequest(String),
    /// 500 Internal Server Error: storage failure or other unexpected error.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        // Routes only name fixed collections, so even an unknown collection is
        // a server fault rather than a caller mistake.
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("nope".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_service_error_maps_to_500() {
        let err = ServiceError::from(analytics_log_core::UnknownCollectionError {
            name: "bookmarks".to_owned(),
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
