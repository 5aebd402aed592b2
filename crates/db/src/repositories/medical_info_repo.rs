//! Repository for the `medical_info` table.

use sqlx::PgPool;

use checkin_core::types::DbId;

use crate::models::medical_info::{CreateMedicalInfo, MedicalInfo, UpdateMedicalInfo};

/// Column list for medical_info queries.
const COLUMNS: &str = "id, person_id, medical_conditions, contact_name, contact_phone";

/// Provides CRUD operations for medical info records.
pub struct MedicalInfoRepo;

impl MedicalInfoRepo {
    /// Insert a medical info record with a client-supplied id, returning the
    /// created row. Callers check for an existing id first to signal 409.
    ///
    /// The explicit id bypasses the serial sequence, so the sequence is
    /// advanced in the same transaction; otherwise a later sequence-generated
    /// insert (the check-in pending row) would collide on the primary key.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMedicalInfo,
    ) -> Result<MedicalInfo, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO medical_info
                (id, person_id, medical_conditions, contact_name, contact_phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let medical_info = sqlx::query_as::<_, MedicalInfo>(&query)
            .bind(input.id)
            .bind(input.person_id)
            .bind(&input.medical_conditions)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('medical_info', 'id'),
                           GREATEST((SELECT MAX(id) FROM medical_info), 1))",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(medical_info)
    }

    /// Find a medical info record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MedicalInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medical_info WHERE id = $1");
        sqlx::query_as::<_, MedicalInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace all mutable fields of a medical info record, returning the
    /// updated row, or `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedicalInfo,
    ) -> Result<Option<MedicalInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE medical_info SET
                person_id = $2,
                medical_conditions = $3,
                contact_name = $4,
                contact_phone = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MedicalInfo>(&query)
            .bind(id)
            .bind(input.person_id)
            .bind(&input.medical_conditions)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a medical info record. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medical_info WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
