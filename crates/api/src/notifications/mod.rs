//! Outbound notification delivery.

pub mod email;
