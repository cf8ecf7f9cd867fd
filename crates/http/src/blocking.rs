//! Helper for running file-backed service calls in async handlers.
//!
//! Every service call reads (and may rewrite) the whole document with blocking
//! file I/O, so it runs on the blocking pool:
//! 1. Spawning a blocking task
//! 2. Handling join errors
//! 3. Converting service errors into `ApiError`

use analytics_log_service::ServiceError;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking service closure and returns its value or an `ApiError`.
///
/// # Example
/// ```ignore
/// let records = blocking_service(move || state.collections.list_records("learnings")).await?;
/// ```
pub async fn blocking_service<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("blocking task failed: {e}")))?
        .map_err(ApiError::from)
}
