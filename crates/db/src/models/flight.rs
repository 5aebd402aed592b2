//! Flight model, read-only to the check-in service.

use checkin_core::types::DbId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `flights` table.
///
/// The flight number is globally unique and at most 6 characters
/// (enforced by `uq_flights_flight_number` and the column width).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Flight {
    pub id: DbId,
    pub flight_number: String,
    pub base_price: Decimal,
    pub tax_percent: Decimal,
    pub surcharge: Decimal,
    pub status: String,
}
