//! # rental-core: Pure Business Logic for the Car Rental Ledger
//!
//! This crate is the **heart** of the rental ledger. It tracks car inventory,
//! customers and active rentals, prices rentals with a weekend surcharge and
//! accrues loyalty points. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Car Rental Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Interactive Menu (rental-cli)                    │   │
//! │  │   View Cars ──► Rent ──► Return ──► History ──► Rental Log      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ rental-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  system   │  │ validation│  │   │
//! │  │   │   Car     │  │   Money   │  │  Rental   │  │   rules   │  │   │
//! │  │   │ Customer  │  │  markup   │  │  System   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • IN-MEMORY COLLECTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Car, Customer, Rental, RentalDay, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`system`] - The `RentalSystem` that owns all collections
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{Car, Customer, Money, RentalDay, RentalSystem};
//!
//! let mut system = RentalSystem::new();
//! system
//!     .add_car(Car::new("C001", "Toyota", "Camry", Money::from_cents(6000)).unwrap())
//!     .unwrap();
//! system
//!     .add_customer(Customer::new("CUS001", "John").unwrap())
//!     .unwrap();
//!
//! let outcome = system
//!     .rent_car("C001", "CUS001", 3, &RentalDay::new("Saturday"))
//!     .unwrap();
//!
//! // 60.00 × 1.20 × 3 days
//! assert_eq!(outcome.total_price.cents(), 21600);
//! assert_eq!(outcome.loyalty_points, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod system;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rental_core::Money` instead of
// `use rental_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use system::RentalSystem;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Weekend surcharge in basis points (2000 = 20%).
///
/// A car's current price per day is always either its base price or
/// base price × 1.20. Nothing else ever lands in the stored price.
pub const WEEKEND_SURCHARGE_BPS: u32 = 2000;

/// Highest base price per day a car may carry, in cents ($1,000,000.00).
///
/// Keeps `base × 1.20 × MAX_RENTAL_DAYS` far inside `i64` cents.
pub const MAX_BASE_PRICE_CENTS: i64 = 100_000_000;

/// Longest rental accepted by [`RentalSystem::rent_car`], in days.
pub const MAX_RENTAL_DAYS: u32 = 365;

/// Maximum length of identifiers (car IDs, customer IDs).
pub const MAX_ID_LEN: usize = 32;

/// Maximum length of free-text fields (brand, model, customer name).
pub const MAX_NAME_LEN: usize = 100;
