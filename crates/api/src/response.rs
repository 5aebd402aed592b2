//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; deletes return a
//! `{ "message": ... }` body instead. Use these types rather than ad-hoc
//! `serde_json::json!` so serialization stays consistent.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": ... }` body for successful deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
