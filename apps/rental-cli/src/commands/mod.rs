//! # Commands Module
//!
//! The operations the menu (or any other front end) drives.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Commands                                        │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐                      │
//! │  │  car.rs             │  │  customer.rs        │                      │
//! │  │  • add_car          │  │  • add_customer     │                      │
//! │  │  • list_available_  │  │                     │                      │
//! │  │    cars             │  │                     │                      │
//! │  └─────────────────────┘  └─────────────────────┘                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │  rental.rs                                  │                       │
//! │  │  • rent_car          • list_rental_history  │                       │
//! │  │  • return_car        • list_rental_log      │                       │
//! │  └─────────────────────────────────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Take `&LedgerState` plus already-parsed arguments
//! - Return `Result<T, ApiError>` where T is serializable
//! - Hold the ledger lock for exactly one `with_system*` call

pub mod car;
pub mod customer;
pub mod rental;
