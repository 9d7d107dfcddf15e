//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── CoreError        - Rental bookkeeping failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rental-cli errors (app)                                               │
//! │  ├── ApiError         - What the menu prints (code + message)          │
//! │  └── ConfigError      - Bad config file or environment value           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Menu output            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is recoverable by the caller. A failed operation never
//! leaves a partial mutation behind.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Rental bookkeeping errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No available car carries this ID.
    ///
    /// ## When This Occurs
    /// - Car ID doesn't exist in the inventory
    /// - Car exists but is currently rented
    #[error("Car is not available or invalid car ID: {0}")]
    CarNotFoundOrUnavailable(String),

    /// Customer ID doesn't exist.
    #[error("Invalid customer ID: {0}")]
    CustomerNotFound(String),

    /// No active rental for this car.
    ///
    /// ## When This Occurs
    /// - Car ID doesn't exist
    /// - Car exists but was never rented, or was already returned
    #[error("Car is not rented or invalid car ID: {0}")]
    RentalNotFound(String),

    /// A car with this ID is already in the inventory.
    #[error("Car '{0}' already exists")]
    DuplicateCar(String),

    /// A customer with this ID is already registered.
    #[error("Customer '{0}' already exists")]
    DuplicateCustomer(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparsable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CarNotFoundOrUnavailable("C999".to_string());
        assert_eq!(
            err.to_string(),
            "Car is not available or invalid car ID: C999"
        );

        let err = CoreError::DuplicateCustomer("CUS001".to_string());
        assert_eq!(err.to_string(), "Customer 'CUS001' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "car id".to_string(),
        };
        assert_eq!(err.to_string(), "car id is required");

        let err = ValidationError::OutOfRange {
            field: "days".to_string(),
            min: 1,
            max: 365,
        };
        assert_eq!(err.to_string(), "days must be between 1 and 365");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "base price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
