//! Booking model, read-only to the check-in service.

use checkin_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
    pub id: DbId,
    pub flight_id: DbId,
    pub booking_date: Timestamp,
    pub booking_status: String,
    pub total_price: Decimal,
}
