//! Domain types, validation, and the error taxonomy shared by the
//! check-in backend crates.

pub mod checkin;
pub mod error;
pub mod types;
