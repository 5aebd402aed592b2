//! Handlers for the boarding pass check-in workflow.
//!
//! Check-in resolves a passenger's last name and a flight number through
//! four ordered lookups (person, flight, passenger, booking), then writes
//! the pending luggage/medical rows and the boarding pass in one
//! transaction. All lookups must succeed before anything is written.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use checkin_core::checkin::{validate_flight_number, validate_last_name};
use checkin_core::error::CoreError;
use checkin_core::types::DbId;
use checkin_db::repositories::{
    BoardingPassRepo, BookingRepo, FlightRepo, PassengerRepo, PersonRepo,
};

use crate::error::{AppError, AppResult};
use crate::notifications::email::CheckinMailer;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Query parameters for check-in.
#[derive(Debug, serde::Deserialize)]
pub struct CheckinParams {
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "flightNumber")]
    pub flight_number: String,
}

/// POST /boarding-pass?lastName=&flightNumber=
///
/// Materialize a complete check-in record: resolve person, flight,
/// passenger, and booking, then create the pending luggage and medical rows
/// together with the boarding pass.
pub async fn create_boarding_pass(
    State(state): State<AppState>,
    Query(params): Query<CheckinParams>,
) -> AppResult<impl IntoResponse> {
    validate_last_name(&params.last_name).map_err(CoreError::Validation)?;
    validate_flight_number(&params.flight_number).map_err(CoreError::Validation)?;

    // Independent lookups first (person, flight), then the dependent chain
    // (passenger needs the person, booking needs the passenger). Any miss
    // aborts before a single row is written.
    let person = PersonRepo::find_by_last_name(&state.pool, &params.last_name)
        .await?
        .ok_or_else(|| not_found("Person not found"))?;

    let flight = FlightRepo::find_by_flight_number(&state.pool, &params.flight_number)
        .await?
        .ok_or_else(|| not_found("Flight not found"))?;

    let passenger = PassengerRepo::find_by_person_id(&state.pool, person.id)
        .await?
        .ok_or_else(|| not_found("Passenger not found"))?;

    let booking = BookingRepo::find_by_id(&state.pool, passenger.booking_id)
        .await?
        .ok_or_else(|| not_found("Booking not found"))?;

    let boarding_pass = BoardingPassRepo::create_checked_in(
        &state.pool,
        passenger.id,
        booking.id,
        flight.id,
        person.id,
    )
    .await?;

    tracing::info!(
        boarding_pass_id = boarding_pass.id,
        passenger_id = passenger.id,
        flight_number = %flight.flight_number,
        "Boarding pass created"
    );

    if let Some(mailer) = &state.mailer {
        send_confirmation(Arc::clone(mailer), person.mail, flight.flight_number);
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: boarding_pass })))
}

/// GET /boarding-pass/{id}
///
/// Fetch a boarding pass by its primary key.
pub async fn get_boarding_pass(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let boarding_pass = BoardingPassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "BoardingPass",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: boarding_pass }))
}

/// GET /boarding-pass-by-passenger/{passengerId}
///
/// Fetch the boarding pass for a given passenger.
pub async fn get_boarding_pass_by_passenger(
    State(state): State<AppState>,
    Path(passenger_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let boarding_pass = BoardingPassRepo::find_by_passenger_id(&state.pool, passenger_id)
        .await?
        .ok_or_else(|| not_found("Boarding pass not found"))?;

    Ok(Json(DataResponse { data: boarding_pass }))
}

/// DELETE /boarding-pass/{id}
///
/// Delete a boarding pass. The associated luggage and medical rows are kept;
/// they are managed through their own endpoints.
pub async fn delete_boarding_pass(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BoardingPassRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BoardingPass",
            id,
        }));
    }

    tracing::info!(boarding_pass_id = id, "Boarding pass deleted");

    Ok(Json(MessageResponse {
        message: "Boarding pass deleted".to_string(),
    }))
}

fn not_found(message: &str) -> AppError {
    AppError::Core(CoreError::NotFoundNamed(message.to_string()))
}

/// Fire-and-forget confirmation email; failures are logged, never surfaced.
fn send_confirmation(mailer: Arc<CheckinMailer>, to_email: String, flight_number: String) {
    tokio::spawn(async move {
        if let Err(err) = mailer
            .send_checkin_confirmation(&to_email, &flight_number)
            .await
        {
            tracing::warn!(error = %err, "Check-in confirmation email failed");
        }
    });
}
