//! # API Error Type
//!
//! Unified error type for commands, plus the startup errors of the app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Rental Menu                        │
//! │                                                                         │
//! │  Menu option                 Command                                    │
//! │  ───────────                 ───────                                    │
//! │                                                                         │
//! │  "2. Rent a Car"                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::rental::rent_car                                      │  │
//! │  │  Result<RentalOutcome, ApiError>                                 │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::CustomerNotFound ──────────► ApiError { NOT_FOUND } │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Menu prints `message`, then shows the menu again                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only startup failures ([`CliError`]) end the process.

use serde::Serialize;
use thiserror::Error;

use rental_core::{CoreError, ValidationError};

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Invalid customer ID: CUS404"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Customer or rental not found
    NotFound,

    /// Car unknown or already rented out
    CarUnavailable,

    /// Input validation failed
    ValidationError,

    /// Identifier already taken
    Conflict,
}

impl ErrorCode {
    /// The code as it appears in serialized errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::CarUnavailable => "CAR_UNAVAILABLE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Conflict => "CONFLICT",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::CarNotFoundOrUnavailable(_) => ErrorCode::CarUnavailable,
            CoreError::CustomerNotFound(_) | CoreError::RentalNotFound(_) => ErrorCode::NotFound,
            CoreError::DuplicateCar(_) | CoreError::DuplicateCustomer(_) => ErrorCode::Conflict,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };

        match err {
            // Drop the "Validation error:" prefix, the field message says it all
            CoreError::Validation(e) => ApiError::new(code, e.to_string()),
            other => ApiError::new(code, other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to seed sample data: {0}")]
    Seed(ApiError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
