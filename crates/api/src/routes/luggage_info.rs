//! Route definitions for luggage info CRUD.
//!
//! Mounted at `/luggage-info` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::luggage_info;
use crate::state::AppState;

/// Luggage info routes.
///
/// ```text
/// POST   /        -> create_luggage_info
/// GET    /{id}    -> get_luggage_info
/// PUT    /{id}    -> put_luggage_info
/// DELETE /{id}    -> delete_luggage_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(luggage_info::create_luggage_info))
        .route(
            "/{id}",
            get(luggage_info::get_luggage_info)
                .put(luggage_info::put_luggage_info)
                .delete(luggage_info::delete_luggage_info),
        )
}
