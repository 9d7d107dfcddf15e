//! # Rental Commands
//!
//! The rental lifecycle as seen from the menu.
//!
//! ## Rental Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rental Lifecycle                                     │
//! │                                                                         │
//! │  ┌──────────┐   rent_car    ┌──────────┐   return_car   ┌──────────┐   │
//! │  │ Car      │──────────────►│ Active   │───────────────►│ Returned │   │
//! │  │ available│               │ rental   │                │ (log)    │   │
//! │  └──────────┘               └──────────┘                └──────────┘   │
//! │                                  │                           │          │
//! │                      list_rental_history             list_rental_log   │
//! │                      (active only)                   (everything)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rental_core::{RentalDay, RentalLogEntry, RentalOutcome, RentalSummary};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::LedgerState;

/// Rents a car to a customer.
///
/// ## Returns
/// Total price charged and the customer's new loyalty balance.
///
/// ## Errors
/// - `CAR_UNAVAILABLE` if the car is unknown or already out
/// - `NOT_FOUND` if the customer is unknown
/// - `VALIDATION_ERROR` if `days` is out of range
pub fn rent_car(
    ledger: &LedgerState,
    car_id: &str,
    customer_id: &str,
    days: u32,
    day: &RentalDay,
) -> Result<RentalOutcome, ApiError> {
    debug!(car_id = %car_id, customer_id = %customer_id, days, day = %day, "rent_car command");

    let outcome = ledger
        .with_system_mut(|s| s.rent_car(car_id, customer_id, days, day))
        .map_err(|e| {
            warn!(car_id = %car_id, customer_id = %customer_id, error = %e, "rent_car rejected");
            ApiError::from(e)
        })?;

    info!(
        rental_id = %outcome.rental_id,
        car_id = %car_id,
        customer_id = %customer_id,
        total = %outcome.total_price,
        loyalty_points = outcome.loyalty_points,
        "car rented"
    );
    Ok(outcome)
}

/// Returns a rented car.
///
/// ## Returns
/// The summary of the rental that was closed.
pub fn return_car(ledger: &LedgerState, car_id: &str) -> Result<RentalSummary, ApiError> {
    debug!(car_id = %car_id, "return_car command");

    let summary = ledger
        .with_system_mut(|s| s.return_car(car_id).map(|rental| rental.summary()))
        .map_err(|e| {
            warn!(car_id = %car_id, error = %e, "return_car rejected");
            ApiError::from(e)
        })?;

    info!(car_id = %car_id, "car returned");
    Ok(summary)
}

/// Rentals that are currently out, oldest first.
pub fn list_rental_history(ledger: &LedgerState) -> Vec<RentalSummary> {
    debug!("list_rental_history command");
    ledger.with_system(|s| s.rental_history().collect())
}

/// Every rental ever made, oldest first, with its status.
pub fn list_rental_log(ledger: &LedgerState) -> Vec<RentalLogEntry> {
    debug!("list_rental_log command");
    ledger.with_system(|s| s.rental_log().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{car::add_car, customer::add_customer};
    use crate::error::ErrorCode;
    use rental_core::{Money, RentalStatus};

    fn ledger() -> LedgerState {
        let ledger = LedgerState::new();
        add_car(&ledger, "C001", "Toyota", "Camry", Money::from_dollars(60)).unwrap();
        add_customer(&ledger, "CUS001", "John").unwrap();
        ledger
    }

    #[test]
    fn test_rent_and_return_round() {
        let ledger = ledger();

        let outcome = rent_car(&ledger, "C001", "CUS001", 3, &RentalDay::new("Saturday")).unwrap();
        assert_eq!(outcome.total_price.cents(), 21600);
        assert_eq!(outcome.loyalty_points, 3);
        assert_eq!(list_rental_history(&ledger).len(), 1);

        let closed = return_car(&ledger, "C001").unwrap();
        assert_eq!(closed.customer_name, "John");
        assert_eq!(closed.days, 3);
        assert!(list_rental_history(&ledger).is_empty());

        let log = list_rental_log(&ledger);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].status, RentalStatus::Returned);
    }

    #[test]
    fn test_error_codes() {
        let ledger = ledger();
        let monday = RentalDay::new("Monday");

        let err = rent_car(&ledger, "C999", "CUS001", 1, &monday).unwrap_err();
        assert_eq!(err.code, ErrorCode::CarUnavailable);

        let err = rent_car(&ledger, "C001", "CUS999", 1, &monday).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = rent_car(&ledger, "C001", "CUS001", 0, &monday).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = return_car(&ledger, "C001").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Car is not rented or invalid car ID: C001");
    }
}
