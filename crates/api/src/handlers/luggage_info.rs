//! Handlers for luggage info CRUD.
//!
//! Shipping addresses are validated before any write: 1-150 characters,
//! alphanumeric and spaces only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use checkin_core::checkin::validate_shipping_address;
use checkin_core::error::CoreError;
use checkin_core::types::DbId;
use checkin_db::models::luggage_info::{CreateLuggageInfo, UpdateLuggageInfo};
use checkin_db::repositories::LuggageInfoRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /luggage-info
///
/// Create a luggage info record with a client-supplied id. An existing id is
/// a conflict; the stored row is left untouched.
pub async fn create_luggage_info(
    State(state): State<AppState>,
    Json(input): Json<CreateLuggageInfo>,
) -> AppResult<impl IntoResponse> {
    validate_shipping_address(&input.shipping_address).map_err(CoreError::Validation)?;

    if LuggageInfoRepo::find_by_id(&state.pool, input.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Luggage info with id {} already exists",
            input.id
        ))));
    }

    let luggage_info = LuggageInfoRepo::create(&state.pool, &input).await?;

    tracing::info!(luggage_info_id = luggage_info.id, "Luggage info created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: luggage_info })))
}

/// GET /luggage-info/{id}
///
/// Fetch a luggage info record by its id.
pub async fn get_luggage_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let luggage_info = LuggageInfoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "LuggageInfo",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: luggage_info }))
}

/// PUT /luggage-info/{id}
///
/// Full replace of the shipping address and luggage id.
pub async fn put_luggage_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLuggageInfo>,
) -> AppResult<impl IntoResponse> {
    validate_shipping_address(&input.shipping_address).map_err(CoreError::Validation)?;

    let luggage_info = LuggageInfoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "LuggageInfo",
                id,
            })
        })?;

    tracing::info!(luggage_info_id = id, "Luggage info replaced");

    Ok(Json(DataResponse { data: luggage_info }))
}

/// DELETE /luggage-info/{id}
pub async fn delete_luggage_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LuggageInfoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "LuggageInfo",
            id,
        }));
    }

    tracing::info!(luggage_info_id = id, "Luggage info deleted");

    Ok(Json(MessageResponse {
        message: "Luggage info deleted".to_string(),
    }))
}
