//! # Car Commands
//!
//! Inventory setup and the available-cars query.

use rental_core::{Car, CarListing, Money, RentalDay};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::LedgerState;

/// Adds a car to the inventory.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a bad ID, empty brand/model or non-positive price
/// - `CONFLICT` if the ID is already taken
pub fn add_car(
    ledger: &LedgerState,
    id: &str,
    brand: &str,
    model: &str,
    base_price: Money,
) -> Result<(), ApiError> {
    debug!(car_id = %id, brand = %brand, model = %model, base_price = %base_price, "add_car command");

    let car = Car::new(id, brand, model, base_price)?;
    ledger
        .with_system_mut(|s| s.add_car(car))
        .map_err(|e| {
            warn!(car_id = %id, error = %e, "add_car rejected");
            ApiError::from(e)
        })?;

    info!(car_id = %id, "car added");
    Ok(())
}

/// Lists available cars of `brand` with a base price of at most `max_price`.
///
/// ## Pricing
/// - `day = None`: one day at each car's stored current price
/// - `day = Some(d)`: one day quoted for `d`, weekend surcharge included
pub fn list_available_cars(
    ledger: &LedgerState,
    brand: &str,
    max_price: Money,
    day: Option<&RentalDay>,
) -> Vec<CarListing> {
    debug!(brand = %brand, max_price = %max_price, day = ?day, "list_available_cars command");

    ledger.with_system(|s| match day {
        Some(day) => s.quote_available_cars(brand, max_price, day).collect(),
        None => s.available_cars(brand, max_price).collect(),
    })
}
