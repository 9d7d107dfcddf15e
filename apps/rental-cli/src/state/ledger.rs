//! # Ledger State
//!
//! Shares one `RentalSystem` between everything that serves requests.
//!
//! ## Thread Safety
//! The system is wrapped in `Arc<Mutex<T>>` because:
//! 1. Cars, customers and rentals are mutated together by a single rent
//! 2. A rent must look up, price and record without another caller in between
//! 3. Cloning the state hands out another handle to the same ledger
//!
//! ```text
//! rent_car ──► lock ──► check car ──► check customer ──► mutate ──► unlock
//!                 ▲                                                    │
//!                 └─────────── every other command waits ──────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use rental_core::RentalSystem;

/// Mutex-guarded rental ledger.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    system: Arc<Mutex<RentalSystem>>,
}

impl LedgerState {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust
    /// use rental_cli::state::LedgerState;
    ///
    /// let ledger = LedgerState::new();
    /// let count = ledger.with_system(|s| s.cars().count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_system<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RentalSystem) -> R,
    {
        // RentalSystem operations validate before mutating, so a panic
        // elsewhere cannot leave it half-updated.
        let system = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        f(&system)
    }

    /// Executes a function with write access to the ledger.
    pub fn with_system_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RentalSystem) -> R,
    {
        let mut system = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::{Car, Customer, Money, RentalDay};
    use std::thread;

    #[test]
    fn test_clones_share_one_ledger() {
        let ledger = LedgerState::new();
        let other = ledger.clone();

        other
            .with_system_mut(|s| {
                s.add_car(Car::new("C001", "Toyota", "Camry", Money::from_dollars(60))?)
            })
            .unwrap();

        assert!(ledger.with_system(|s| s.car("C001").is_some()));
    }

    #[test]
    fn test_concurrent_rents_of_one_car_succeed_once() {
        let ledger = LedgerState::new();
        ledger
            .with_system_mut(|s| {
                s.add_car(Car::new("C001", "Toyota", "Camry", Money::from_dollars(60))?)?;
                for i in 0..8 {
                    s.add_customer(Customer::new(&format!("CUS{i}"), "Racer")?)?;
                }
                Ok::<(), rental_core::CoreError>(())
            })
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let ledger = ledger.clone();
                thread::spawn(move || {
                    ledger.with_system_mut(|s| {
                        s.rent_car("C001", &format!("CUS{i}"), 1, &RentalDay::new("Monday"))
                            .is_ok()
                    })
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(ledger.with_system(|s| s.active_rental_count()), 1);
    }
}
