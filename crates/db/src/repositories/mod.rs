//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod boarding_pass_repo;
pub mod booking_repo;
pub mod flight_repo;
pub mod luggage_info_repo;
pub mod medical_info_repo;
pub mod passenger_repo;
pub mod person_repo;

pub use boarding_pass_repo::BoardingPassRepo;
pub use booking_repo::BookingRepo;
pub use flight_repo::FlightRepo;
pub use luggage_info_repo::LuggageInfoRepo;
pub use medical_info_repo::MedicalInfoRepo;
pub use passenger_repo::PassengerRepo;
pub use person_repo::PersonRepo;
