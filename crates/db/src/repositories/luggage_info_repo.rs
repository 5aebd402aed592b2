//! Repository for the `luggage_info` table.

use sqlx::PgPool;

use checkin_core::types::DbId;

use crate::models::luggage_info::{CreateLuggageInfo, LuggageInfo, UpdateLuggageInfo};

/// Column list for luggage_info queries.
const COLUMNS: &str = "id, shipping_address, luggage_id";

/// Provides CRUD operations for luggage info records.
pub struct LuggageInfoRepo;

impl LuggageInfoRepo {
    /// Insert a luggage info record with a client-supplied id, returning the
    /// created row. Callers check for an existing id first to signal 409.
    ///
    /// The explicit id bypasses the serial sequence, so the sequence is
    /// advanced in the same transaction; otherwise a later sequence-generated
    /// insert (the check-in pending row) would collide on the primary key.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLuggageInfo,
    ) -> Result<LuggageInfo, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO luggage_info (id, shipping_address, luggage_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let luggage_info = sqlx::query_as::<_, LuggageInfo>(&query)
            .bind(input.id)
            .bind(&input.shipping_address)
            .bind(input.luggage_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('luggage_info', 'id'),
                           GREATEST((SELECT MAX(id) FROM luggage_info), 1))",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(luggage_info)
    }

    /// Find a luggage info record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LuggageInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM luggage_info WHERE id = $1");
        sqlx::query_as::<_, LuggageInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the shipping address and luggage id of a record, returning the
    /// updated row, or `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLuggageInfo,
    ) -> Result<Option<LuggageInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE luggage_info SET
                shipping_address = $2,
                luggage_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LuggageInfo>(&query)
            .bind(id)
            .bind(&input.shipping_address)
            .bind(input.luggage_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a luggage info record. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM luggage_info WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
