//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, so the
//! full middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) is exercised without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use checkin_api::config::ServerConfig;
use checkin_api::router::build_app_router;
use checkin_api::state::AppState;
use checkin_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. The SMTP mailer is disabled.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer: None,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app, returning the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with no body (query-parameter endpoints).
pub async fn post(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert status and return the parsed body in one step.
pub async fn assert_json(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------
// Persons, flights, bookings, and passengers are created by upstream systems
// in production; tests seed them directly.

/// Insert a person; identification number and mail are derived from the last
/// name to satisfy the unique constraints.
pub async fn seed_person(pool: &PgPool, last_name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO persons
            (identification_number, first_name, last_name, phone_number,
             country, province, city, residence, mail)
         VALUES ($1, 'Test', $2, '5550100', 'Colombia', 'Antioquia',
                 'Medellin', 'Calle 10', $3)
         RETURNING id",
    )
    .bind(format!("ID-{last_name}"))
    .bind(last_name)
    .bind(format!("{}@example.com", last_name.to_lowercase()))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a flight with the given flight number.
pub async fn seed_flight(pool: &PgPool, flight_number: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO flights (flight_number, base_price, tax_percent, surcharge, status)
         VALUES ($1, 250.00, 19.00, 35.50, 'Scheduled')
         RETURNING id",
    )
    .bind(flight_number)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a confirmed booking on the given flight.
pub async fn seed_booking(pool: &PgPool, flight_id: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO bookings (flight_id, booking_date, booking_status, total_price)
         VALUES ($1, NOW(), 'Confirmed', 333.25)
         RETURNING id",
    )
    .bind(flight_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a passenger linking a person to a booking.
pub async fn seed_passenger(pool: &PgPool, person_id: DbId, booking_id: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO passengers (person_id, booking_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(person_id)
    .bind(booking_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Fully resolvable check-in fixture: person, flight, booking, passenger.
pub struct CheckinFixture {
    pub person_id: DbId,
    pub flight_id: DbId,
    pub booking_id: DbId,
    pub passenger_id: DbId,
}

/// Seed everything `POST /boarding-pass` needs to succeed.
pub async fn seed_checkin_fixture(
    pool: &PgPool,
    last_name: &str,
    flight_number: &str,
) -> CheckinFixture {
    let person_id = seed_person(pool, last_name).await;
    let flight_id = seed_flight(pool, flight_number).await;
    let booking_id = seed_booking(pool, flight_id).await;
    let passenger_id = seed_passenger(pool, person_id, booking_id).await;
    CheckinFixture {
        person_id,
        flight_id,
        booking_id,
        passenger_id,
    }
}

/// Count the rows in a table. Table names come from test code only.
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
