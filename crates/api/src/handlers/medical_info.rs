//! Handlers for medical info CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use checkin_core::error::CoreError;
use checkin_core::types::DbId;
use checkin_db::models::medical_info::{CreateMedicalInfo, UpdateMedicalInfo};
use checkin_db::repositories::MedicalInfoRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /medical-info
///
/// Create a medical info record with a client-supplied id. An existing id is
/// a conflict; the stored row is left untouched.
pub async fn create_medical_info(
    State(state): State<AppState>,
    Json(input): Json<CreateMedicalInfo>,
) -> AppResult<impl IntoResponse> {
    if MedicalInfoRepo::find_by_id(&state.pool, input.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Medical info with id {} already exists",
            input.id
        ))));
    }

    let medical_info = MedicalInfoRepo::create(&state.pool, &input).await?;

    tracing::info!(
        medical_info_id = medical_info.id,
        person_id = medical_info.person_id,
        "Medical info created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: medical_info })))
}

/// GET /medical-info/{id}
///
/// Fetch a medical info record by its id.
pub async fn get_medical_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let medical_info = MedicalInfoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "MedicalInfo",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: medical_info }))
}

/// PUT /medical-info/{id}
///
/// Full replace of all mutable fields (person id, conditions, emergency
/// contact name and phone).
pub async fn put_medical_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedicalInfo>,
) -> AppResult<impl IntoResponse> {
    let medical_info = MedicalInfoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "MedicalInfo",
                id,
            })
        })?;

    tracing::info!(medical_info_id = id, "Medical info replaced");

    Ok(Json(DataResponse { data: medical_info }))
}

/// DELETE /medical-info/{id}
pub async fn delete_medical_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MedicalInfoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MedicalInfo",
            id,
        }));
    }

    tracing::info!(medical_info_id = id, "Medical info deleted");

    Ok(Json(MessageResponse {
        message: "Medical info deleted".to_string(),
    }))
}
