//! Luggage info model and DTOs.

use checkin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `luggage_info` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LuggageInfo {
    pub id: DbId,
    pub shipping_address: String,
    pub luggage_id: Option<DbId>,
}

/// DTO for creating a luggage info record. The id is client-supplied;
/// creating an id that already exists is a conflict.
#[derive(Debug, Deserialize)]
pub struct CreateLuggageInfo {
    pub id: DbId,
    pub shipping_address: String,
    pub luggage_id: Option<DbId>,
}

/// DTO for replacing a luggage info record (full replace).
#[derive(Debug, Deserialize)]
pub struct UpdateLuggageInfo {
    pub shipping_address: String,
    pub luggage_id: Option<DbId>,
}
