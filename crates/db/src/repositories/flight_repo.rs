//! Read-only repository for the `flights` table.

use sqlx::PgPool;

use checkin_core::types::DbId;

use crate::models::flight::Flight;

/// Column list for flights queries.
const COLUMNS: &str = "id, flight_number, base_price, tax_percent, surcharge, status";

/// Provides lookups over flights.
pub struct FlightRepo;

impl FlightRepo {
    /// Find a flight by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights WHERE id = $1");
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a flight by its unique flight number.
    pub async fn find_by_flight_number(
        pool: &PgPool,
        flight_number: &str,
    ) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights WHERE flight_number = $1");
        sqlx::query_as::<_, Flight>(&query)
            .bind(flight_number)
            .fetch_optional(pool)
            .await
    }
}
