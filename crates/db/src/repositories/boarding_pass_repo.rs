//! Repository for the `boarding_passes` table.

use sqlx::PgPool;

use checkin_core::checkin::PENDING_PLACEHOLDER;
use checkin_core::types::DbId;

use crate::models::boarding_pass::BoardingPass;
use crate::models::luggage_info::LuggageInfo;
use crate::models::medical_info::MedicalInfo;

/// Column list for boarding_passes queries.
const COLUMNS: &str = "id, passenger_id, booking_id, flight_id, \
    medical_info_id, luggage_info_id, boarding_time";

/// Provides check-in creation and lookups for boarding passes.
pub struct BoardingPassRepo;

impl BoardingPassRepo {
    /// Materialize a complete check-in record in one transaction.
    ///
    /// Inserts a pending luggage row (placeholder address, luggage id 0), a
    /// pending medical row for the person, and the boarding pass linking the
    /// resolved passenger, booking, and flight. Either all three rows commit
    /// or none do, so a failed boarding-pass insert leaves no orphaned
    /// pending records.
    pub async fn create_checked_in(
        pool: &PgPool,
        passenger_id: DbId,
        booking_id: DbId,
        flight_id: DbId,
        person_id: DbId,
    ) -> Result<BoardingPass, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let luggage = sqlx::query_as::<_, LuggageInfo>(
            "INSERT INTO luggage_info (shipping_address, luggage_id)
             VALUES ($1, 0)
             RETURNING id, shipping_address, luggage_id",
        )
        .bind(PENDING_PLACEHOLDER)
        .fetch_one(&mut *tx)
        .await?;

        let medical = sqlx::query_as::<_, MedicalInfo>(
            "INSERT INTO medical_info
                (person_id, medical_conditions, contact_name, contact_phone)
             VALUES ($1, $2, $2, $2)
             RETURNING id, person_id, medical_conditions, contact_name, contact_phone",
        )
        .bind(person_id)
        .bind(PENDING_PLACEHOLDER)
        .fetch_one(&mut *tx)
        .await?;

        let insert_query = format!(
            "INSERT INTO boarding_passes
                (passenger_id, booking_id, flight_id, medical_info_id, luggage_info_id, boarding_time)
             VALUES ($1, $2, $3, $4, $5, NOW())
             RETURNING {COLUMNS}"
        );
        let boarding_pass = sqlx::query_as::<_, BoardingPass>(&insert_query)
            .bind(passenger_id)
            .bind(booking_id)
            .bind(flight_id)
            .bind(medical.id)
            .bind(luggage.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(boarding_pass)
    }

    /// Find a boarding pass by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BoardingPass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boarding_passes WHERE id = $1");
        sqlx::query_as::<_, BoardingPass>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the boarding pass for a given passenger, newest first.
    pub async fn find_by_passenger_id(
        pool: &PgPool,
        passenger_id: DbId,
    ) -> Result<Option<BoardingPass>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM boarding_passes
             WHERE passenger_id = $1
             ORDER BY boarding_time DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, BoardingPass>(&query)
            .bind(passenger_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a boarding pass. Returns `true` when a row was removed.
    ///
    /// The associated luggage and medical rows are left in place; they have
    /// their own lifecycle through the luggage-info and medical-info
    /// endpoints.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM boarding_passes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
