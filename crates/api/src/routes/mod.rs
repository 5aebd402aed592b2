//! Route definitions.

pub mod boarding_pass;
pub mod health;
pub mod luggage_info;
pub mod medical_info;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /boarding-pass                          create (POST ?lastName&flightNumber)
/// /boarding-pass/{id}                     get, delete
/// /boarding-pass-by-passenger/{id}        get by passenger
///
/// /luggage-info                           create
/// /luggage-info/{id}                      get, put, delete
///
/// /medical-info                           create
/// /medical-info/{id}                      get, put, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(boarding_pass::router())
        .nest("/luggage-info", luggage_info::router())
        .nest("/medical-info", medical_info::router())
}
