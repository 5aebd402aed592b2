//! Person model. Rows are created by upstream identity systems and are
//! read-only to the check-in service.

use checkin_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `persons` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Person {
    pub id: DbId,
    pub identification_number: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub country: String,
    pub province: String,
    pub city: String,
    pub residence: String,
    pub mail: String,
}
