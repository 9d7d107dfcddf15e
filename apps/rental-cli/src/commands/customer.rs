//! # Customer Commands

use rental_core::Customer;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::LedgerState;

/// Registers a customer with zero loyalty points.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a bad ID or empty name
/// - `CONFLICT` if the ID is already registered
pub fn add_customer(ledger: &LedgerState, id: &str, name: &str) -> Result<(), ApiError> {
    debug!(customer_id = %id, name = %name, "add_customer command");

    let customer = Customer::new(id, name)?;
    ledger
        .with_system_mut(|s| s.add_customer(customer))
        .map_err(|e| {
            warn!(customer_id = %id, error = %e, "add_customer rejected");
            ApiError::from(e)
        })?;

    info!(customer_id = %id, "customer added");
    Ok(())
}
