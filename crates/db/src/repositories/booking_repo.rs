//! Read-only repository for the `bookings` table.

use sqlx::PgPool;

use checkin_core::types::DbId;

use crate::models::booking::Booking;

/// Column list for bookings queries.
const COLUMNS: &str = "id, flight_id, booking_date, booking_status, total_price";

/// Provides lookups over bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Find a booking by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
