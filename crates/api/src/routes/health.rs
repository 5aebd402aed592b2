use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok` when check-ins can be served, `degraded`
    /// when the database is unreachable.
    pub status: &'static str,
    /// Service identifier for fleet dashboards.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the check-in database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
///
/// Check-in is unusable without the database, so a failed ping degrades the
/// whole service rather than reporting a partial status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = checkin_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
