//! # Rental System
//!
//! Owns the car inventory, the customer register and the rental records,
//! and exposes the rental lifecycle operations.
//!
//! ## Collections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RentalSystem                                     │
//! │                                                                         │
//! │  cars ─────────── Vec<Car>        (insertion order, never shrinks)      │
//! │  car_index ────── CarId ──► position in `cars`                          │
//! │                                                                         │
//! │  customers ────── Vec<Customer>   (insertion order, never shrinks)      │
//! │  customer_index ─ CustomerId ──► position in `customers`                │
//! │                                                                         │
//! │  rental_log ───── Vec<Rental>     (append-only, every rental ever)      │
//! │  active_rentals ─ CarId ──► position in `rental_log`                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A car has an entry in `active_rentals` iff its availability flag is false.
//! - Identifiers are unique; a duplicate insert is rejected and the first
//!   entity stays.
//! - Every failure path returns before the first mutation.
//!
//! ## Rent Flow
//! ```text
//! rent_car(car_id, customer_id, days, day)
//!      │
//!      ├── days out of range? ─────────────► Validation
//!      ├── car unknown or rented? ─────────► CarNotFoundOrUnavailable
//!      ├── customer unknown? ──────────────► CustomerNotFound
//!      │        (nothing mutated yet on any of the above)
//!      ▼
//! update_price(day) → total = price × days → mark_rented
//!      → log Rental → credit `days` loyalty points → RentalOutcome
//! ```

use std::collections::HashMap;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{
    Car, CarId, CarListing, Customer, CustomerId, Rental, RentalDay, RentalLogEntry,
    RentalOutcome, RentalStatus, RentalSummary,
};
use crate::validation::validate_rental_days;

/// In-memory rental ledger.
///
/// Not internally synchronized. Callers serving more than one actor wrap it
/// in a single lock (see `LedgerState` in rental-cli).
#[derive(Debug, Default)]
pub struct RentalSystem {
    cars: Vec<Car>,
    car_index: HashMap<CarId, usize>,
    customers: Vec<Customer>,
    customer_index: HashMap<CustomerId, usize>,
    rental_log: Vec<Rental>,
    active_rentals: HashMap<CarId, usize>,
}

impl RentalSystem {
    /// Creates an empty system.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Adds a car to the inventory.
    ///
    /// ## Errors
    /// `DuplicateCar` if a car with the same ID already exists. The existing
    /// car is left untouched.
    pub fn add_car(&mut self, car: Car) -> CoreResult<()> {
        if self.car_index.contains_key(car.id()) {
            return Err(CoreError::DuplicateCar(car.id().to_string()));
        }

        self.car_index.insert(car.id().clone(), self.cars.len());
        self.cars.push(car);
        Ok(())
    }

    /// Registers a customer.
    ///
    /// ## Errors
    /// `DuplicateCustomer` if the ID is already registered.
    pub fn add_customer(&mut self, customer: Customer) -> CoreResult<()> {
        if self.customer_index.contains_key(customer.id()) {
            return Err(CoreError::DuplicateCustomer(customer.id().to_string()));
        }

        self.customer_index
            .insert(customer.id().clone(), self.customers.len());
        self.customers.push(customer);
        Ok(())
    }

    // =========================================================================
    // Rental Lifecycle
    // =========================================================================

    /// Rents a car to a customer for `days` days starting on `day`.
    ///
    /// The car is checked before the customer, and nothing is mutated until
    /// both lookups succeed.
    ///
    /// ## Errors
    /// - `Validation` if `days` is 0 or above `MAX_RENTAL_DAYS`
    /// - `CarNotFoundOrUnavailable` if the ID is unknown or the car is out
    /// - `CustomerNotFound` if the customer ID is unknown
    pub fn rent_car(
        &mut self,
        car_id: &str,
        customer_id: &str,
        days: u32,
        day: &RentalDay,
    ) -> CoreResult<RentalOutcome> {
        validate_rental_days(days)?;

        let car_pos = self
            .car_index
            .get(car_id)
            .copied()
            .filter(|&pos| self.cars[pos].is_available())
            .ok_or_else(|| CoreError::CarNotFoundOrUnavailable(car_id.to_string()))?;

        let customer_pos = self
            .customer_index
            .get(customer_id)
            .copied()
            .ok_or_else(|| CoreError::CustomerNotFound(customer_id.to_string()))?;

        let car = &mut self.cars[car_pos];
        car.update_price(day);
        let total_price = car.calculate_price(days);
        car.mark_rented();

        let rental = Rental::new(
            &self.cars[car_pos],
            &self.customers[customer_pos],
            days,
            day.clone(),
            total_price,
            Utc::now(),
        );
        let rental_id = rental.id().to_string();
        self.active_rentals
            .insert(rental.car_id().clone(), self.rental_log.len());
        self.rental_log.push(rental);

        let customer = &mut self.customers[customer_pos];
        customer.add_loyalty_points(days);

        Ok(RentalOutcome {
            rental_id,
            total_price,
            loyalty_points: customer.loyalty_points(),
        })
    }

    /// Returns a rented car and closes its active rental.
    ///
    /// The closed rental drops out of [`rental_history`](Self::rental_history)
    /// but stays in [`rental_log`](Self::rental_log).
    ///
    /// ## Errors
    /// `RentalNotFound` if no active rental exists for this car.
    pub fn return_car(&mut self, car_id: &str) -> CoreResult<&Rental> {
        let log_pos = self
            .active_rentals
            .remove(car_id)
            .ok_or_else(|| CoreError::RentalNotFound(car_id.to_string()))?;

        if let Some(&car_pos) = self.car_index.get(car_id) {
            self.cars[car_pos].mark_returned();
        }

        Ok(&self.rental_log[log_pos])
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Available cars of `brand` (case-insensitive) with a base price of at
    /// most `max_price`, in insertion order.
    ///
    /// `price_per_day` is the car's stored current price for one day, i.e.
    /// whatever the last rent left behind. Use
    /// [`quote_available_cars`](Self::quote_available_cars) for a price that
    /// matches a specific day.
    pub fn available_cars<'a>(
        &'a self,
        brand: &str,
        max_price: Money,
    ) -> impl Iterator<Item = CarListing> + 'a {
        self.matching_cars(brand, max_price).map(|car| CarListing {
            id: car.id().clone(),
            brand: car.brand().to_string(),
            model: car.model().to_string(),
            price_per_day: car.calculate_price(1),
        })
    }

    /// Same filter as [`available_cars`](Self::available_cars), but each car
    /// is priced for one day starting on `day`. No car is mutated.
    pub fn quote_available_cars<'a>(
        &'a self,
        brand: &str,
        max_price: Money,
        day: &'a RentalDay,
    ) -> impl Iterator<Item = CarListing> + 'a {
        self.matching_cars(brand, max_price)
            .map(move |car| CarListing {
                id: car.id().clone(),
                brand: car.brand().to_string(),
                model: car.model().to_string(),
                price_per_day: car.quote_price(day, 1),
            })
    }

    /// Currently active rentals, oldest first.
    ///
    /// Returned rentals are not included.
    pub fn rental_history(&self) -> impl Iterator<Item = RentalSummary> + '_ {
        self.active_rentals().map(Rental::summary)
    }

    /// Active rental records, oldest first.
    pub fn active_rentals(&self) -> impl Iterator<Item = &Rental> + '_ {
        self.rental_log
            .iter()
            .enumerate()
            .filter(move |(pos, rental)| self.active_rentals.get(rental.car_id()) == Some(pos))
            .map(|(_, rental)| rental)
    }

    /// Every rental ever created, oldest first, tagged with its status.
    pub fn rental_log(&self) -> impl Iterator<Item = RentalLogEntry> + '_ {
        self.rental_log.iter().enumerate().map(move |(pos, rental)| {
            let status = if self.active_rentals.get(rental.car_id()) == Some(&pos) {
                RentalStatus::Active
            } else {
                RentalStatus::Returned
            };
            RentalLogEntry {
                rental: rental.clone(),
                status,
            }
        })
    }

    /// Looks up a car by ID.
    pub fn car(&self, id: &str) -> Option<&Car> {
        self.car_index.get(id).map(|&pos| &self.cars[pos])
    }

    /// Looks up a customer by ID.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customer_index.get(id).map(|&pos| &self.customers[pos])
    }

    /// All cars in insertion order.
    pub fn cars(&self) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter()
    }

    /// All customers in insertion order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.iter()
    }

    /// Number of cars currently rented out.
    pub fn active_rental_count(&self) -> usize {
        self.active_rentals.len()
    }

    fn matching_cars<'a>(
        &'a self,
        brand: &str,
        max_price: Money,
    ) -> impl Iterator<Item = &'a Car> + 'a {
        let brand = brand.trim().to_lowercase();
        self.cars.iter().filter(move |car| {
            car.is_available()
                && car.brand().to_lowercase() == brand
                && car.base_price() <= max_price
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn saturday() -> RentalDay {
        RentalDay::new("Saturday")
    }

    fn monday() -> RentalDay {
        RentalDay::new("Monday")
    }

    /// The sample fleet the menu seeds on startup.
    fn seeded() -> RentalSystem {
        let mut system = RentalSystem::new();
        for (id, brand, model, dollars) in [
            ("C001", "Toyota", "Camry", 60),
            ("C002", "Honda", "Accord", 70),
            ("C003", "Mahindra", "Thar", 150),
        ] {
            system
                .add_car(Car::new(id, brand, model, Money::from_dollars(dollars)).unwrap())
                .unwrap();
        }
        system
            .add_customer(Customer::new("CUS001", "John").unwrap())
            .unwrap();
        system
            .add_customer(Customer::new("CUS002", "Jane Smith").unwrap())
            .unwrap();
        system
    }

    /// Active rentals and unavailable cars must line up exactly.
    fn assert_consistent(system: &RentalSystem) {
        for car in system.cars() {
            let active = system.active_rentals().any(|r| r.car_id() == car.id());
            assert_eq!(active, !car.is_available(), "car {}", car.id());
        }
    }

    #[test]
    fn test_weekend_rent_scenario() {
        let mut system = seeded();

        let outcome = system.rent_car("C001", "CUS001", 3, &saturday()).unwrap();
        assert_eq!(outcome.total_price.cents(), 21600);
        assert_eq!(outcome.loyalty_points, 3);
        assert!(!system.car("C001").unwrap().is_available());
        assert_consistent(&system);

        let history: Vec<_> = system.rental_history().collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].customer_name, "John");
        assert_eq!(history[0].total_price.cents(), 21600);

        let returned = system.return_car("C001").unwrap();
        assert_eq!(returned.id(), outcome.rental_id);
        assert!(system.car("C001").unwrap().is_available());
        assert_eq!(system.rental_history().count(), 0);
        assert_consistent(&system);
    }

    #[test]
    fn test_returned_rental_stays_in_log() {
        let mut system = seeded();
        system.rent_car("C001", "CUS001", 3, &saturday()).unwrap();
        system.rent_car("C002", "CUS002", 1, &monday()).unwrap();
        system.return_car("C001").unwrap();

        let log: Vec<_> = system.rental_log().collect();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].rental.car_id().as_str(), "C001");
        assert_eq!(log[0].status, RentalStatus::Returned);
        assert_eq!(log[1].status, RentalStatus::Active);
        assert_eq!(log[0].rental.total_price().cents(), 21600);
    }

    #[test]
    fn test_same_car_rented_twice_logs_both() {
        let mut system = seeded();
        system.rent_car("C001", "CUS001", 1, &monday()).unwrap();
        system.return_car("C001").unwrap();
        system.rent_car("C001", "CUS002", 2, &saturday()).unwrap();

        let statuses: Vec<_> = system.rental_log().map(|e| e.status).collect();
        assert_eq!(statuses, vec![RentalStatus::Returned, RentalStatus::Active]);

        let history: Vec<_> = system.rental_history().collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].customer_name, "Jane Smith");
        assert_consistent(&system);
    }

    #[test]
    fn test_unknown_car_fails_without_changes() {
        let mut system = seeded();

        let err = system.rent_car("C999", "CUS001", 1, &monday()).unwrap_err();
        assert_eq!(err, CoreError::CarNotFoundOrUnavailable("C999".to_string()));
        assert_eq!(system.customer("CUS001").unwrap().loyalty_points(), 0);
        assert_eq!(system.rental_log().count(), 0);
    }

    #[test]
    fn test_rented_car_cannot_be_rented_again() {
        let mut system = seeded();
        system.rent_car("C001", "CUS001", 2, &monday()).unwrap();

        let err = system.rent_car("C001", "CUS002", 1, &monday()).unwrap_err();
        assert!(matches!(err, CoreError::CarNotFoundOrUnavailable(_)));
        assert_eq!(system.customer("CUS002").unwrap().loyalty_points(), 0);
        assert_eq!(system.active_rental_count(), 1);
        assert_eq!(system.rental_log().count(), 1);
    }

    #[test]
    fn test_unknown_customer_leaves_car_untouched() {
        let mut system = seeded();

        let err = system.rent_car("C001", "NOBODY", 2, &saturday()).unwrap_err();
        assert_eq!(err, CoreError::CustomerNotFound("NOBODY".to_string()));

        let car = system.car("C001").unwrap();
        assert!(car.is_available());
        // update_price never ran either
        assert_eq!(car.current_price(), car.base_price());
        assert_eq!(system.active_rental_count(), 0);
    }

    #[test]
    fn test_car_checked_before_customer() {
        let mut system = seeded();
        let err = system.rent_car("C999", "NOBODY", 1, &monday()).unwrap_err();
        assert!(matches!(err, CoreError::CarNotFoundOrUnavailable(_)));
    }

    #[test]
    fn test_invalid_days_rejected_before_lookup() {
        let mut system = seeded();

        let err = system.rent_car("C001", "CUS001", 0, &monday()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(system.car("C001").unwrap().is_available());
        assert!(system.rent_car("C001", "CUS001", 366, &monday()).is_err());
    }

    #[test]
    fn test_loyalty_points_add_exactly_days() {
        let mut system = seeded();
        system.rent_car("C001", "CUS001", 3, &monday()).unwrap();
        let before = system.customer("CUS001").unwrap().loyalty_points();

        let outcome = system.rent_car("C002", "CUS001", 5, &monday()).unwrap();
        assert_eq!(outcome.loyalty_points, before + 5);
        assert_eq!(system.customer("CUS001").unwrap().loyalty_points(), 8);
    }

    #[test]
    fn test_return_unknown_or_idle_car_fails() {
        let mut system = seeded();

        assert_eq!(
            system.return_car("C002").unwrap_err(),
            CoreError::RentalNotFound("C002".to_string())
        );
        assert!(matches!(
            system.return_car("C999"),
            Err(CoreError::RentalNotFound(_))
        ));

        system.rent_car("C002", "CUS001", 1, &monday()).unwrap();
        system.return_car("C002").unwrap();
        assert!(system.return_car("C002").is_err());
        assert!(system.car("C002").unwrap().is_available());
    }

    #[test]
    fn test_duplicate_ids_rejected_first_wins() {
        let mut system = seeded();

        let dup = Car::new("C001", "Ford", "Focus", Money::from_dollars(40)).unwrap();
        assert_eq!(
            system.add_car(dup).unwrap_err(),
            CoreError::DuplicateCar("C001".to_string())
        );
        assert_eq!(system.car("C001").unwrap().brand(), "Toyota");
        assert_eq!(system.cars().count(), 3);
        assert_eq!(system.available_cars("Ford", Money::from_dollars(999)).count(), 0);

        let dup = Customer::new("CUS001", "Impostor").unwrap();
        assert!(matches!(
            system.add_customer(dup),
            Err(CoreError::DuplicateCustomer(_))
        ));
        assert_eq!(system.customer("CUS001").unwrap().name(), "John");
    }

    #[test]
    fn test_available_cars_filters() {
        let mut system = seeded();
        system
            .add_car(Car::new("C004", "Toyota", "Corolla", Money::from_dollars(45)).unwrap())
            .unwrap();
        system
            .add_car(Car::new("C005", "Toyota", "Supra", Money::from_dollars(200)).unwrap())
            .unwrap();

        let ids: Vec<_> = system
            .available_cars("toyota", Money::from_dollars(60))
            .map(|l| l.id.to_string())
            .collect();
        // Case-insensitive brand, inclusive price bound, insertion order
        assert_eq!(ids, vec!["C001", "C004"]);

        system.rent_car("C004", "CUS001", 1, &monday()).unwrap();
        let ids: Vec<_> = system
            .available_cars("TOYOTA", Money::from_dollars(1000))
            .map(|l| l.id.to_string())
            .collect();
        assert_eq!(ids, vec!["C001", "C005"]);
    }

    #[test]
    fn test_available_cars_is_restartable() {
        let system = seeded();
        let first: Vec<_> = system.available_cars("Honda", Money::from_dollars(100)).collect();
        let second: Vec<_> = system.available_cars("Honda", Money::from_dollars(100)).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_listing_reports_stored_price() {
        let mut system = seeded();
        system.rent_car("C001", "CUS001", 1, &saturday()).unwrap();
        system.return_car("C001").unwrap();

        // The surcharge from the last weekend rent is still stored
        let listing: Vec<_> = system
            .available_cars("Toyota", Money::from_dollars(60))
            .collect();
        assert_eq!(listing[0].price_per_day.cents(), 7200);

        // A quote for a weekday is consistent regardless of history
        let monday = monday();
        let quoted: Vec<_> = system
            .quote_available_cars("Toyota", Money::from_dollars(60), &monday)
            .collect();
        assert_eq!(quoted[0].price_per_day.cents(), 6000);
        assert_eq!(system.car("C001").unwrap().current_price().cents(), 7200);
    }

    #[test]
    fn test_max_price_filters_on_base_price() {
        let mut system = seeded();
        system.rent_car("C001", "CUS001", 1, &saturday()).unwrap();
        system.return_car("C001").unwrap();

        // Stored price is 72.00 but the base price 60.00 is what is compared
        assert_eq!(
            system.available_cars("Toyota", Money::from_dollars(60)).count(),
            1
        );
        assert_eq!(
            system
                .available_cars("Toyota", Money::from_cents(5999))
                .count(),
            0
        );
    }

    #[test]
    fn test_priciest_car_rents_for_a_full_year_of_weekends() {
        let mut system = seeded();
        let price = Money::from_cents(crate::MAX_BASE_PRICE_CENTS);
        system
            .add_car(Car::new("LUX", "Bugatti", "Chiron", price).unwrap())
            .unwrap();

        let quoted: Vec<_> = system
            .quote_available_cars("bugatti", price, &RentalDay::new("Sunday"))
            .collect();
        assert_eq!(quoted[0].price_per_day.cents(), 120_000_000);

        let outcome = system
            .rent_car("LUX", "CUS001", crate::MAX_RENTAL_DAYS, &saturday())
            .unwrap();
        assert_eq!(outcome.total_price.cents(), 120_000_000 * 365);
        assert!(outcome.total_price.is_positive());
        assert_consistent(&system);
    }

    #[test]
    fn test_overpriced_car_never_enters_the_fleet() {
        let overpriced: Money = "50000000000000000".parse().unwrap();
        assert!(Car::new("C9", "Toyota", "Camry", overpriced).is_err());

        let mut system = seeded();
        let err = system.rent_car("C9", "CUS001", 2, &monday()).unwrap_err();
        assert_eq!(err, CoreError::CarNotFoundOrUnavailable("C9".to_string()));
        assert_eq!(system.customer("CUS001").unwrap().loyalty_points(), 0);
    }
}
