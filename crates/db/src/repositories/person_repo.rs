//! Read-only repository for the `persons` table.

use sqlx::PgPool;

use checkin_core::types::DbId;

use crate::models::person::Person;

/// Column list for persons queries.
const COLUMNS: &str = "id, identification_number, first_name, last_name, \
    phone_number, country, province, city, residence, mail";

/// Provides lookups over persons. Rows are owned by upstream systems.
pub struct PersonRepo;

impl PersonRepo {
    /// Find a person by their ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a person by last name.
    ///
    /// Last names are not unique; when several match, the lowest id wins so
    /// repeated lookups are deterministic.
    pub async fn find_by_last_name(
        pool: &PgPool,
        last_name: &str,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE last_name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Person>(&query)
            .bind(last_name)
            .fetch_optional(pool)
            .await
    }
}
