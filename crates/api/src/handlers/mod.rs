//! HTTP handlers, one module per resource.

pub mod boarding_pass;
pub mod luggage_info;
pub mod medical_info;
