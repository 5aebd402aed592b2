//! Read-only repository for the `passengers` table.

use sqlx::PgPool;

use checkin_core::types::DbId;

use crate::models::passenger::Passenger;

/// Column list for passengers queries.
const COLUMNS: &str = "id, person_id, booking_id";

/// Provides lookups over passengers.
pub struct PassengerRepo;

impl PassengerRepo {
    /// Find a passenger by their ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passengers WHERE id = $1");
        sqlx::query_as::<_, Passenger>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the passenger record for a given person.
    pub async fn find_by_person_id(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Option<Passenger>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM passengers WHERE person_id = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Passenger>(&query)
            .bind(person_id)
            .fetch_optional(pool)
            .await
    }
}
