//! # Validation Module
//!
//! Input rules the booking, floor-plan and purchasing forms apply before
//! anything reaches the coordinator or the order book.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (web UI)                                                │
//! │  └── Required fields, immediate feedback                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service command                                              │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Coordinator / order book                                     │
//! │  └── Conflicts, transition legality                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The coordinator itself performs no validation; a reservation that skips
//! this module is stored as given.
//!
//! ## Usage
//! ```rust
//! use galley_core::validation::{validate_party_size, validate_time};
//!
//! assert!(validate_party_size(4).is_ok());
//! assert!(validate_time("19:30").is_ok());
//! assert!(validate_time("7:30pm").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::types::hhmm;
use crate::{MAX_PARTY_SIZE, MAX_TABLE_CAPACITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a guest name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a table section name ("Main", "Terrace").
pub fn validate_section(section: &str) -> ValidationResult<()> {
    let section = section.trim();

    if section.is_empty() {
        return Err(ValidationError::Required {
            field: "section".to_string(),
        });
    }

    if section.chars().count() > 50 {
        return Err(ValidationError::TooLong {
            field: "section".to_string(),
            max: 50,
        });
    }

    Ok(())
}

/// Validates free-form notes and special requests.
pub fn validate_notes(notes: Option<&str>) -> ValidationResult<()> {
    match notes {
        Some(text) if text.chars().count() > 500 => Err(ValidationError::TooLong {
            field: "notes".to_string(),
            max: 500,
        }),
        _ => Ok(()),
    }
}

/// Validates an email address shape (one `@`, non-empty parts, a dot in
/// the domain). Deliverability is not checked.
///
/// ## Example
/// ```rust
/// use galley_core::validation::validate_email;
///
/// assert!(validate_email("chef@galley.example").is_ok());
/// assert!(validate_email("chef@localhost").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain @"))?;

    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(invalid("must look like name@example.com"));
    }

    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !domain.ends_with('.') => {
            Ok(())
        }
        _ => Err(invalid("domain must contain a dot")),
    }
}

// =============================================================================
// Date & Time Validators
// =============================================================================

/// Parses a `YYYY-MM-DD` date.
pub fn validate_date(date: &str) -> ValidationResult<NaiveDate> {
    let date = date.trim();

    if date.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "must be YYYY-MM-DD".to_string(),
    })
}

/// Parses a 24h `HH:MM` time.
pub fn validate_time(time: &str) -> ValidationResult<NaiveTime> {
    let time = time.trim();

    if time.is_empty() {
        return Err(ValidationError::Required {
            field: "time".to_string(),
        });
    }

    // chrono accepts "7:30"; booking slots are always two-digit hours
    if time.len() != 5 {
        return Err(ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "must be HH:MM".to_string(),
        });
    }

    NaiveTime::parse_from_str(time, hhmm::FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: "time".to_string(),
        reason: "must be HH:MM".to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a party size.
///
/// ## Rules
/// - At least 1 guest
/// - At most MAX_PARTY_SIZE (20); larger groups are booked as events
pub fn validate_party_size(party_size: u32) -> ValidationResult<()> {
    if party_size == 0 || party_size > MAX_PARTY_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "party size".to_string(),
            min: 1,
            max: i64::from(MAX_PARTY_SIZE),
        });
    }

    Ok(())
}

/// Validates a table number (positive).
pub fn validate_table_number(number: u32) -> ValidationResult<()> {
    if number == 0 {
        return Err(ValidationError::MustBePositive {
            field: "table number".to_string(),
        });
    }

    Ok(())
}

/// Validates seats at a table (1..=MAX_TABLE_CAPACITY).
pub fn validate_capacity(capacity: u32) -> ValidationResult<()> {
    if capacity == 0 || capacity > MAX_TABLE_CAPACITY {
        return Err(ValidationError::OutOfRange {
            field: "capacity".to_string(),
            min: 1,
            max: i64::from(MAX_TABLE_CAPACITY),
        });
    }

    Ok(())
}

/// Validates a feedback star rating (1..=5).
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        });
    }

    Ok(())
}

/// Validates an ordered quantity (> 0).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (samples, promotional stock)
///
/// ## Example
/// ```rust
/// use galley_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1845).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string.
///
/// ## Example
/// ```rust
/// use galley_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Form Aggregates
// =============================================================================

/// Checks a booking form and returns the parsed slot.
pub fn validate_new_reservation(
    customer_name: &str,
    date: &str,
    time: &str,
    party_size: u32,
    notes: Option<&str>,
) -> ValidationResult<(NaiveDate, NaiveTime)> {
    validate_customer_name(customer_name)?;
    let date = validate_date(date)?;
    let time = validate_time(time)?;
    validate_party_size(party_size)?;
    validate_notes(notes)?;
    Ok((date, time))
}

/// Checks the "add table" form.
pub fn validate_new_table(number: u32, capacity: u32, section: &str) -> ValidationResult<()> {
    validate_table_number(number)?;
    validate_capacity(capacity)?;
    validate_section(section)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ada Moreno").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_party_size() {
        assert!(validate_party_size(1).is_ok());
        assert!(validate_party_size(20).is_ok());
        assert!(validate_party_size(0).is_err());
        assert!(validate_party_size(21).is_err());
    }

    #[test]
    fn test_validate_table_fields() {
        assert!(validate_new_table(4, 6, "Terrace").is_ok());
        assert!(matches!(
            validate_new_table(0, 6, "Terrace"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_new_table(4, 0, "Terrace"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_new_table(4, 21, "Terrace").is_err());
        assert!(matches!(
            validate_new_table(4, 6, " "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_date_and_time() {
        assert_eq!(
            validate_date("2025-05-03").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 3).unwrap()
        );
        assert!(validate_date("03/05/2025").is_err());
        assert!(validate_date("2025-02-30").is_err());

        assert_eq!(
            validate_time("19:00").unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap()
        );
        assert!(validate_time("9:00").is_err());
        assert!(validate_time("24:00").is_err());
        assert!(validate_time("19:00:00").is_err());
        assert!(validate_time("").is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("chef@galley.example").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("chef.galley.example").is_err());
        assert!(validate_email("@galley.example").is_err());
        assert!(validate_email("chef@galley").is_err());
        assert!(validate_email("chef@galley.").is_err());
        assert!(validate_email("chef @galley.example").is_err());
    }

    #[test]
    fn test_validate_purchase_numbers() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("123").is_err());
    }

    #[test]
    fn test_validate_new_reservation() {
        let (date, time) =
            validate_new_reservation("Ada Moreno", "2025-05-03", "19:00", 4, None).unwrap();
        assert_eq!(date.to_string(), "2025-05-03");
        assert_eq!(time.format(hhmm::FORMAT).to_string(), "19:00");

        assert!(validate_new_reservation("", "2025-05-03", "19:00", 4, None).is_err());
        assert!(validate_new_reservation("Ada", "2025-05-03", "19:00", 0, None).is_err());
        let long_note = "x".repeat(501);
        assert!(
            validate_new_reservation("Ada", "2025-05-03", "19:00", 2, Some(&long_note)).is_err()
        );
    }
}
