//! Check-in constants and validation functions.
//!
//! Pure validators run at the HTTP boundary before anything reaches the
//! database; each returns `Err` with a human-readable message suitable for
//! a 400 response body.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Placeholder written into luggage/medical free-text fields created during
/// check-in, before the passenger has provided the real values.
pub const PENDING_PLACEHOLDER: &str = "Pendiente";

/// Maximum length of a luggage shipping address.
pub const MAX_SHIPPING_ADDRESS_LENGTH: usize = 150;

/// Maximum length of a flight number.
pub const MAX_FLIGHT_NUMBER_LENGTH: usize = 6;

/// Maximum length of a passenger last name accepted as a query parameter.
pub const MAX_LAST_NAME_LENGTH: usize = 255;

/// Maximum length of a booking status value.
pub const MAX_BOOKING_STATUS_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a luggage shipping address: 1-150 characters, alphanumeric and
/// spaces only.
pub fn validate_shipping_address(address: &str) -> Result<(), String> {
    if address.is_empty() {
        return Err("Shipping address cannot be blank".to_string());
    }
    if address.chars().count() > MAX_SHIPPING_ADDRESS_LENGTH {
        return Err(format!(
            "Shipping address must be between 1 and {MAX_SHIPPING_ADDRESS_LENGTH} characters"
        ));
    }
    if !address.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err("Shipping address must not contain special characters".to_string());
    }
    Ok(())
}

/// Validate a flight number: non-empty, at most 6 characters.
pub fn validate_flight_number(flight_number: &str) -> Result<(), String> {
    if flight_number.is_empty() {
        return Err("Flight number is required".to_string());
    }
    if flight_number.chars().count() > MAX_FLIGHT_NUMBER_LENGTH {
        return Err(format!(
            "Flight number must be between 1 and {MAX_FLIGHT_NUMBER_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a passenger last name used to look up a person.
pub fn validate_last_name(last_name: &str) -> Result<(), String> {
    if last_name.trim().is_empty() {
        return Err("Last name is required".to_string());
    }
    if last_name.chars().count() > MAX_LAST_NAME_LENGTH {
        return Err(format!(
            "Last name must not exceed {MAX_LAST_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a booking status value.
pub fn validate_booking_status(status: &str) -> Result<(), String> {
    if status.trim().is_empty() {
        return Err("Booking status cannot be blank".to_string());
    }
    if status.chars().count() > MAX_BOOKING_STATUS_LENGTH {
        return Err(format!(
            "Booking status must not exceed {MAX_BOOKING_STATUS_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_shipping_address -------------------------------------------

    #[test]
    fn valid_shipping_address_accepted() {
        assert!(validate_shipping_address("123 Main St").is_ok());
        assert!(validate_shipping_address("Calle 45 Apto 301").is_ok());
        assert!(validate_shipping_address(PENDING_PLACEHOLDER).is_ok());
    }

    #[test]
    fn empty_shipping_address_rejected() {
        let result = validate_shipping_address("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be blank"));
    }

    #[test]
    fn shipping_address_with_special_characters_rejected() {
        let result = validate_shipping_address("123 Main St!");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("special characters"));
        assert!(validate_shipping_address("Calle 45, Apto 301").is_err());
        assert!(validate_shipping_address("a\tb").is_err());
    }

    #[test]
    fn overlong_shipping_address_rejected() {
        let address = "a".repeat(MAX_SHIPPING_ADDRESS_LENGTH + 1);
        assert!(validate_shipping_address(&address).is_err());
    }

    #[test]
    fn shipping_address_at_limit_accepted() {
        let address = "a".repeat(MAX_SHIPPING_ADDRESS_LENGTH);
        assert!(validate_shipping_address(&address).is_ok());
    }

    // -- validate_flight_number ----------------------------------------------

    #[test]
    fn valid_flight_number_accepted() {
        assert!(validate_flight_number("AA101").is_ok());
        assert!(validate_flight_number("B2").is_ok());
        assert!(validate_flight_number("ABC123").is_ok());
    }

    #[test]
    fn empty_flight_number_rejected() {
        assert!(validate_flight_number("").is_err());
    }

    #[test]
    fn overlong_flight_number_rejected() {
        assert!(validate_flight_number("AA12345").is_err());
    }

    // -- validate_last_name --------------------------------------------------

    #[test]
    fn valid_last_name_accepted() {
        assert!(validate_last_name("Smith").is_ok());
    }

    #[test]
    fn blank_last_name_rejected() {
        assert!(validate_last_name("").is_err());
        assert!(validate_last_name("   ").is_err());
    }

    // -- validate_booking_status ---------------------------------------------

    #[test]
    fn valid_booking_status_accepted() {
        assert!(validate_booking_status("Confirmed").is_ok());
    }

    #[test]
    fn overlong_booking_status_rejected() {
        let status = "x".repeat(MAX_BOOKING_STATUS_LENGTH + 1);
        assert!(validate_booking_status(&status).is_err());
    }
}
