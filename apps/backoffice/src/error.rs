//! # API Error Type
//!
//! Unified error type for back-office commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Galley                                 │
//! │                                                                         │
//! │  Web UI                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  call('assign_table')                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  ValidationError ─────────────────┐                              │  │
//! │  │  CoreError (illegal transition) ──┼──► ApiError { code, message }│  │
//! │  │  AssignOutcome::Conflict ─────────┤                              │  │
//! │  │  DbError ─────────────────────────┘                              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { e.code === "CONFLICT" ... }                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use galley_core::{CoreError, ValidationError};
use galley_store::DbError;

/// Error returned from commands.
///
/// ```json
/// {
///   "code": "CONFLICT",
///   "message": "Table already booked for Ada Moreno at 19:00"
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

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Table already held by another reservation in the slot (409)
    Conflict,

    /// Status change not allowed from the current status (422)
    IllegalTransition,

    /// Other business rule violated (422)
    BusinessLogic,

    /// Database operation failed (500)
    DatabaseError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Conflict, message)
    }
}

/// Converts database errors to API errors. Details are logged, not sent.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        let message = match &err {
            DbError::MalformedValue { key, .. } => {
                format!("Saved setting '{}' could not be read", key)
            }
            DbError::ConnectionFailed(_) | DbError::PoolExhausted => {
                "Database unavailable".to_string()
            }
            DbError::MigrationFailed(_) | DbError::QueryFailed(_) => {
                "Database operation failed".to_string()
            }
        };
        tracing::error!(error = %err, "Database error");
        ApiError::new(ErrorCode::DatabaseError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::ReservationNotFound(id) => ApiError::not_found("Reservation", &id),
            CoreError::PurchaseOrderNotFound(id) => ApiError::not_found("Purchase order", &id),
            CoreError::TemplateNotFound(id) => ApiError::not_found("Order template", &id),
            CoreError::Duplicate { .. } => ApiError::validation(message),
            CoreError::IllegalReservationTransition { .. }
            | CoreError::IllegalOrderTransition { .. }
            | CoreError::NoCommonTransition { .. } => {
                ApiError::new(ErrorCode::IllegalTransition, message)
            }
            CoreError::EmptySelection
            | CoreError::OverReceipt { .. }
            | CoreError::EmptyDelivery(_)
            | CoreError::UnknownOrderItem { .. }
            | CoreError::InactiveTemplate(_) => ApiError::new(ErrorCode::BusinessLogic, message),
            CoreError::Validation(e) => ApiError::from(e),
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
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
