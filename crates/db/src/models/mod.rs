//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs where the API mutates the table
//!
//! Persons, passengers, bookings, and flights are read-only to this service,
//! so those modules carry only the row struct.

pub mod boarding_pass;
pub mod booking;
pub mod flight;
pub mod luggage_info;
pub mod medical_info;
pub mod passenger;
pub mod person;
