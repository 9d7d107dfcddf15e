//! # State Module
//!
//! Application state for the rental menu.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │   LedgerState                │   │   ConfigState                │   │
//! │  │                              │   │                              │   │
//! │  │   Arc<Mutex<RentalSystem>>   │   │   system_name                │   │
//! │  │   cars, customers, rentals   │   │   currency_symbol            │   │
//! │  │                              │   │   seed_sample_data           │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • LedgerState: one Mutex guards all three collections                 │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod ledger;

pub use config::{ConfigState, CONFIG_PATH_VAR};
pub use ledger::LedgerState;
