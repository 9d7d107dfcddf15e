//! # Domain Types
//!
//! Core domain types used throughout the rental ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │    Customer     │   │     Rental      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (CarId)     │   │  id (CustomerId)│   │  id (UUID)      │       │
//! │  │  brand, model   │   │  name           │   │  car_id (ref)   │       │
//! │  │  base_price     │   │  loyalty_points │   │  customer_id    │       │
//! │  │  current_price  │   └─────────────────┘   │  days, total    │       │
//! │  │  available      │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   RentalDay     │   │   CarListing    │   │ RentalSummary   │       │
//! │  │  "Saturday" ... │   │  (query row)    │   │  (history row)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Car Availability
//! ```text
//!            mark_rented()
//!   Available ──────────► Rented
//!       ▲                    │
//!       └────────────────────┘
//!           mark_returned()
//! ```
//! Both transitions are unconditional at this layer; `RentalSystem`
//! enforces the preconditions before calling them.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Datelike, Local, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_base_price, validate_id, validate_name};
use crate::WEEKEND_SURCHARGE_BPS;

// =============================================================================
// Identifiers
// =============================================================================

/// Unique, immutable car identifier (e.g. `C001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(String);

impl CarId {
    /// Validates and wraps a car identifier. Surrounding whitespace is trimmed.
    pub fn new(id: &str) -> Result<Self, ValidationError> {
        validate_id("car id", id)?;
        Ok(CarId(id.trim().to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique, immutable customer identifier (e.g. `CUS001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Validates and wraps a customer identifier.
    pub fn new(id: &str) -> Result<Self, ValidationError> {
        validate_id("customer id", id)?;
        Ok(CustomerId(id.trim().to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the system's maps be queried with a plain `&str`.
impl Borrow<str> for CarId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CustomerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Rental Day
// =============================================================================

/// The day-of-week name a rental starts on, as the caller supplied it.
///
/// Only the exact strings `"Saturday"` and `"Sunday"` count as weekend.
/// `"saturday"` or `"Sat"` are ordinary weekdays as far as pricing goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentalDay(String);

impl RentalDay {
    pub fn new(day: impl Into<String>) -> Self {
        RentalDay(day.into())
    }

    /// Builds the English day name for a chrono weekday.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Weekday;
    /// use rental_core::RentalDay;
    ///
    /// let day = RentalDay::from_weekday(Weekday::Sun);
    /// assert_eq!(day.as_str(), "Sunday");
    /// assert!(day.is_weekend());
    /// ```
    pub fn from_weekday(weekday: Weekday) -> Self {
        let name = match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        };
        RentalDay(name.to_string())
    }

    /// The weekday of the local date.
    pub fn today() -> Self {
        Self::from_weekday(Local::now().weekday())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for exactly `"Saturday"` or `"Sunday"`.
    pub fn is_weekend(&self) -> bool {
        self.0 == "Saturday" || self.0 == "Sunday"
    }
}

impl fmt::Display for RentalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Car
// =============================================================================

/// A car in the rental inventory.
///
/// ## Invariants
/// - `current_price` is either `base_price` or `base_price` + 20%
/// - `base_price` is strictly positive and at most `MAX_BASE_PRICE_CENTS`
///
/// Deserializing goes through the same checks as [`Car::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CarRecord")]
pub struct Car {
    id: CarId,
    brand: String,
    model: String,
    base_price: Money,
    current_price: Money,
    available: bool,
}

impl Car {
    /// Creates an available car whose current price equals its base price.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{Car, Money};
    ///
    /// let car = Car::new("C001", "Toyota", "Camry", Money::from_cents(6000)).unwrap();
    /// assert!(car.is_available());
    /// assert_eq!(car.current_price(), car.base_price());
    ///
    /// assert!(Car::new("C002", "Honda", "Accord", Money::zero()).is_err());
    /// ```
    pub fn new(
        id: &str,
        brand: &str,
        model: &str,
        base_price: Money,
    ) -> Result<Self, ValidationError> {
        let id = CarId::new(id)?;
        validate_name("brand", brand)?;
        validate_name("model", model)?;
        validate_base_price(base_price)?;

        Ok(Car {
            id,
            brand: brand.trim().to_string(),
            model: model.trim().to_string(),
            base_price,
            current_price: base_price,
            available: true,
        })
    }

    #[inline]
    pub fn id(&self) -> &CarId {
        &self.id
    }

    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[inline]
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Price per day as of the last `update_price` call.
    #[inline]
    pub fn current_price(&self) -> Money {
        self.current_price
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Recomputes the stored price per day for the given rental day.
    ///
    /// Weekend days get the 20% surcharge, anything else resets to base.
    /// Calling it again with the same day always yields the same price.
    pub fn update_price(&mut self, day: &RentalDay) {
        self.current_price = Self::price_for(self.base_price, day);
    }

    /// Current price per day × `days`. No check that `days` is positive.
    pub fn calculate_price(&self, days: u32) -> Money {
        self.current_price.multiply_days(days)
    }

    /// What `days` days starting on `day` would cost, without touching the
    /// stored current price.
    pub fn quote_price(&self, day: &RentalDay, days: u32) -> Money {
        Self::price_for(self.base_price, day).multiply_days(days)
    }

    /// Marks the car as rented out.
    pub fn mark_rented(&mut self) {
        self.available = false;
    }

    /// Marks the car as back in the lot.
    pub fn mark_returned(&mut self) {
        self.available = true;
    }

    fn price_for(base: Money, day: &RentalDay) -> Money {
        if day.is_weekend() {
            base.apply_markup(WEEKEND_SURCHARGE_BPS)
        } else {
            base
        }
    }
}

/// Unchecked wire form of a [`Car`].
#[derive(Deserialize)]
struct CarRecord {
    id: String,
    brand: String,
    model: String,
    base_price: Money,
    current_price: Money,
    available: bool,
}

impl TryFrom<CarRecord> for Car {
    type Error = ValidationError;

    fn try_from(record: CarRecord) -> Result<Self, Self::Error> {
        let mut car = Car::new(&record.id, &record.brand, &record.model, record.base_price)?;

        let surcharged = car.base_price.apply_markup(WEEKEND_SURCHARGE_BPS);
        if record.current_price != car.base_price && record.current_price != surcharged {
            return Err(ValidationError::InvalidFormat {
                field: "current price".to_string(),
                reason: "must be the base price or the weekend price".to_string(),
            });
        }

        car.current_price = record.current_price;
        car.available = record.available;
        Ok(car)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer and their loyalty balance.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    loyalty_points: u64,
}

impl Customer {
    /// Creates a customer with zero loyalty points.
    pub fn new(id: &str, name: &str) -> Result<Self, ValidationError> {
        let id = CustomerId::new(id)?;
        validate_name("name", name)?;

        Ok(Customer {
            id,
            name: name.trim().to_string(),
            loyalty_points: 0,
        })
    }

    #[inline]
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn loyalty_points(&self) -> u64 {
        self.loyalty_points
    }

    /// Adds `points` to the running total. The balance never decreases.
    pub fn add_loyalty_points(&mut self, points: u32) {
        self.loyalty_points = self.loyalty_points.saturating_add(points as u64);
    }
}

// =============================================================================
// Rental
// =============================================================================

/// An immutable record of one rental.
///
/// Uses the snapshot pattern: brand, model and customer name are frozen at
/// the time of renting next to the car/customer IDs that reference the live
/// entities in the `RentalSystem`. There are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    id: String,
    car_id: CarId,
    customer_id: CustomerId,
    brand: String,
    model: String,
    customer_name: String,
    days: u32,
    rental_day: RentalDay,
    total_price: Money,
    rented_at: DateTime<Utc>,
}

impl Rental {
    /// Freezes a rental of `car` by `customer` at `total_price`.
    pub fn new(
        car: &Car,
        customer: &Customer,
        days: u32,
        rental_day: RentalDay,
        total_price: Money,
        rented_at: DateTime<Utc>,
    ) -> Self {
        Rental {
            id: Uuid::new_v4().to_string(),
            car_id: car.id().clone(),
            customer_id: customer.id().clone(),
            brand: car.brand().to_string(),
            model: car.model().to_string(),
            customer_name: customer.name().to_string(),
            days,
            rental_day,
            total_price,
            rented_at,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn car_id(&self) -> &CarId {
        &self.car_id
    }

    #[inline]
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[inline]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[inline]
    pub fn days(&self) -> u32 {
        self.days
    }

    #[inline]
    pub fn rental_day(&self) -> &RentalDay {
        &self.rental_day
    }

    /// Fixed at creation, never recomputed.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    #[inline]
    pub fn rented_at(&self) -> DateTime<Utc> {
        self.rented_at
    }

    /// The history row for this rental.
    pub fn summary(&self) -> RentalSummary {
        RentalSummary {
            customer_name: self.customer_name.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            days: self.days,
            total_price: self.total_price,
        }
    }
}

// =============================================================================
// Query Rows
// =============================================================================

/// One row of the available-cars listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListing {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub price_per_day: Money,
}

/// One row of the rental history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalSummary {
    pub customer_name: String,
    pub brand: String,
    pub model: String,
    pub days: u32,
    pub total_price: Money,
}

/// Result of a successful rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalOutcome {
    pub rental_id: String,
    pub total_price: Money,
    /// Customer's loyalty balance after this rental was credited.
    pub loyalty_points: u64,
}

/// Whether a logged rental is still out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Active,
    Returned,
}

/// One entry of the append-only rental log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalLogEntry {
    pub rental: Rental,
    pub status: RentalStatus,
}

// =============================================================================
// Unit Tests
// =============================================================================
