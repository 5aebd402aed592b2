//! Route definitions for the boarding pass workflow.
//!
//! The by-passenger lookup lives on its own path segment, so this router is
//! merged (not nested) into `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::boarding_pass;
use crate::state::AppState;

/// Boarding pass routes.
///
/// ```text
/// POST   /boarding-pass                            -> create_boarding_pass
/// GET    /boarding-pass/{id}                       -> get_boarding_pass
/// DELETE /boarding-pass/{id}                       -> delete_boarding_pass
/// GET    /boarding-pass-by-passenger/{passengerId} -> get_boarding_pass_by_passenger
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/boarding-pass",
            axum::routing::post(boarding_pass::create_boarding_pass),
        )
        .route(
            "/boarding-pass/{id}",
            get(boarding_pass::get_boarding_pass).delete(boarding_pass::delete_boarding_pass),
        )
        .route(
            "/boarding-pass-by-passenger/{passenger_id}",
            get(boarding_pass::get_boarding_pass_by_passenger),
        )
}
