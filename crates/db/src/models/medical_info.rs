//! Medical info model and DTOs.

use checkin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `medical_info` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MedicalInfo {
    pub id: DbId,
    pub person_id: DbId,
    pub medical_conditions: String,
    pub contact_name: String,
    pub contact_phone: String,
}

/// DTO for creating a medical info record. The id is client-supplied;
/// creating an id that already exists is a conflict.
#[derive(Debug, Deserialize)]
pub struct CreateMedicalInfo {
    pub id: DbId,
    pub person_id: DbId,
    pub medical_conditions: String,
    pub contact_name: String,
    pub contact_phone: String,
}

/// DTO for replacing a medical info record. All fields are required:
/// PUT is a full replace, not a partial patch.
#[derive(Debug, Deserialize)]
pub struct UpdateMedicalInfo {
    pub person_id: DbId,
    pub medical_conditions: String,
    pub contact_name: String,
    pub contact_phone: String,
}
