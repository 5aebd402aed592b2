//! Passenger model. Rows link a person to a booking and are created by the
//! reservation system; the check-in workflow only reads them.

use checkin_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `passengers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Passenger {
    pub id: DbId,
    pub person_id: DbId,
    pub booking_id: DbId,
}
