//! # Validation Module
//!
//! Input validation utilities for the rental ledger.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu (rental-cli)                                            │
//! │  ├── Parsing numbers and prices from text                              │
//! │  └── Immediate re-prompt on garbage input                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Entity constructors (Car::new, Customer::new)                │
//! │  └── THIS MODULE: identifiers, names, prices                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: RentalSystem                                                 │
//! │  ├── Unique identifiers                                                │
//! │  └── Rental day-count bounds                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::validation::{validate_id, validate_rental_days};
//!
//! assert!(validate_id("car id", "C001").is_ok());
//! assert!(validate_rental_days(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_BASE_PRICE_CENTS, MAX_ID_LEN, MAX_NAME_LEN, MAX_RENTAL_DAYS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an identifier (car ID, customer ID).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 32 characters
/// - Only letters, digits, hyphens and underscores
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_id;
///
/// assert!(validate_id("customer id", "CUS001").is_ok());
/// assert!(validate_id("customer id", "").is_err());
/// assert!(validate_id("customer id", "CUS 001").is_err());
/// ```
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a free-text name (brand, model, customer name).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a car's base price per day.
///
/// ## Rules
/// - Must be strictly positive
/// - At most MAX_BASE_PRICE_CENTS ($1,000,000.00)
///
/// ## Example
/// ```rust
/// use rental_core::money::Money;
/// use rental_core::validation::validate_base_price;
///
/// assert!(validate_base_price(Money::from_cents(6000)).is_ok());
/// assert!(validate_base_price(Money::zero()).is_err());
/// assert!(validate_base_price(Money::from_dollars(2_000_000)).is_err());
/// ```
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "base price".to_string(),
        });
    }

    if price.cents() > MAX_BASE_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "base price (cents)".to_string(),
            min: 1,
            max: MAX_BASE_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a rental duration in days.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_RENTAL_DAYS (365)
pub fn validate_rental_days(days: u32) -> ValidationResult<()> {
    if days == 0 {
        return Err(ValidationError::MustBePositive {
            field: "days".to_string(),
        });
    }

    if days > MAX_RENTAL_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "days".to_string(),
            min: 1,
            max: MAX_RENTAL_DAYS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("car id", "C001").is_ok());
        assert!(validate_id("car id", "car_01-a").is_ok());

        assert!(validate_id("car id", "").is_err());
        assert!(validate_id("car id", "   ").is_err());
        assert!(validate_id("car id", "C 001").is_err());
        assert!(validate_id("car id", &"C".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("brand", "Toyota").is_ok());
        assert!(validate_name("name", "John Doe").is_ok());
        assert!(validate_name("brand", "").is_err());
        assert!(validate_name("model", &"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::from_cents(1)).is_ok());
        assert!(validate_base_price(Money::zero()).is_err());
        assert!(validate_base_price(Money::from_cents(-100)).is_err());

        assert!(validate_base_price(Money::from_cents(MAX_BASE_PRICE_CENTS)).is_ok());
        assert_eq!(
            validate_base_price(Money::from_cents(MAX_BASE_PRICE_CENTS + 1)),
            Err(ValidationError::OutOfRange {
                field: "base price (cents)".to_string(),
                min: 1,
                max: MAX_BASE_PRICE_CENTS,
            })
        );
    }

    #[test]
    fn test_largest_base_price_cannot_overflow_a_rental() {
        let longest_weekend = Money::from_cents(MAX_BASE_PRICE_CENTS)
            .apply_markup(crate::WEEKEND_SURCHARGE_BPS)
            .multiply_days(MAX_RENTAL_DAYS);
        assert_eq!(longest_weekend.cents(), 120_000_000 * 365);
    }

    #[test]
    fn test_validate_rental_days() {
        assert!(validate_rental_days(1).is_ok());
        assert!(validate_rental_days(365).is_ok());

        assert_eq!(
            validate_rental_days(0),
            Err(ValidationError::MustBePositive {
                field: "days".to_string()
            })
        );
        assert!(validate_rental_days(366).is_err());
    }
}
