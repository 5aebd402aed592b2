//! Route definitions for medical info CRUD.
//!
//! Mounted at `/medical-info` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::medical_info;
use crate::state::AppState;

/// Medical info routes.
///
/// ```text
/// POST   /        -> create_medical_info
/// GET    /{id}    -> get_medical_info
/// PUT    /{id}    -> put_medical_info
/// DELETE /{id}    -> delete_medical_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(medical_info::create_medical_info))
        .route(
            "/{id}",
            get(medical_info::get_medical_info)
                .put(medical_info::put_medical_info)
                .delete(medical_info::delete_medical_info),
        )
}
