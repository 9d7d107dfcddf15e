//! # Sample Data
//!
//! The fleet and customers a fresh session starts with, so the menu is
//! usable without typing in an inventory first. Disable with
//! `RENTAL_SEED_SAMPLE_DATA=false`.

use rental_core::Money;
use tracing::debug;

use crate::commands::{car::add_car, customer::add_customer};
use crate::error::ApiError;
use crate::state::LedgerState;

/// (id, brand, model, base price per day)
pub const SAMPLE_CARS: &[(&str, &str, &str, Money)] = &[
    ("C001", "Toyota", "Camry", Money::from_dollars(60)),
    ("C002", "Honda", "Accord", Money::from_dollars(70)),
    ("C003", "Mahindra", "Thar", Money::from_dollars(150)),
];

/// (id, name)
pub const SAMPLE_CUSTOMERS: &[(&str, &str)] = &[("CUS001", "John Doe"), ("CUS002", "Jane Smith")];

/// Adds the sample cars and customers.
///
/// ## Returns
/// How many cars and customers were added, in that order.
pub fn seed_sample_data(ledger: &LedgerState) -> Result<(usize, usize), ApiError> {
    for &(id, brand, model, base_price) in SAMPLE_CARS {
        add_car(ledger, id, brand, model, base_price)?;
    }

    for &(id, name) in SAMPLE_CUSTOMERS {
        add_customer(ledger, id, name)?;
    }

    debug!(
        cars = SAMPLE_CARS.len(),
        customers = SAMPLE_CUSTOMERS.len(),
        "sample data seeded"
    );
    Ok((SAMPLE_CARS.len(), SAMPLE_CUSTOMERS.len()))
}
