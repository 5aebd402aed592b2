//! Boarding pass model.
//!
//! A boarding pass stores foreign keys only; callers join the referenced
//! rows at read time when they need them.

use checkin_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `boarding_passes` table.
///
/// Immutable after creation: there is no update operation, only delete.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BoardingPass {
    pub id: DbId,
    pub passenger_id: DbId,
    pub booking_id: DbId,
    pub flight_id: DbId,
    pub medical_info_id: DbId,
    pub luggage_info_id: DbId,
    pub boarding_time: Timestamp,
}
