//! # Car Rental CLI Library
//!
//! Core library for the interactive car rental menu.
//! This is the main entry point that configures and runs the session.
//!
//! ## Module Organization
//! ```text
//! rental_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── ledger.rs   ◄─── Mutex-guarded RentalSystem
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── car.rs      ◄─── Inventory and availability
//! │   ├── customer.rs ◄─── Customer registration
//! │   └── rental.rs   ◄─── Rent, return, history, log
//! ├── menu.rs         ◄─── Text menu over any BufRead/Write
//! ├── seed.rs         ◄─── Sample fleet and customers
//! └── error.rs        ◄─── API and startup errors
//! ```

pub mod commands;
pub mod error;
pub mod menu;
pub mod seed;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::CliError;
use menu::Menu;
use state::{ConfigState, LedgerState};

/// Runs one interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults → RENTAL_CONFIG file → RENTAL_* variables                │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • LedgerState: empty RentalSystem behind a Mutex                    │
/// │     • Sample cars/customers unless seeding is disabled                  │
/// │                                                                         │
/// │  4. Run Menu ─────────────────────────────────────────────────────────► │
/// │     • Until "Exit" or end of input                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), CliError> {
    init_tracing();

    let config = ConfigState::load()?;
    info!(system = %config.system_name, "Starting car rental session");

    let ledger = LedgerState::new();
    if config.seed_sample_data {
        let (cars, customers) = seed::seed_sample_data(&ledger).map_err(CliError::Seed)?;
        info!(cars, customers, "Sample data loaded");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&ledger, &config, stdin.lock(), stdout.lock()).run()?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=rental_cli=debug` - Show every command with its arguments
/// - `RUST_LOG=info` - Show rents, returns and additions
/// - Default: WARN (rejected commands only)
///
/// Logs go to stderr so they never mix into the menu output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
