//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct HealthResponse {
    pub ok: bool,
}
