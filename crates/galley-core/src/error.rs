//! # Error Types
//!
//! Domain-specific error types for galley-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  galley-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  galley-store errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  backoffice errors (in app)                                            │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note on the Coordinator
//! The table/reservation coordinator's basic operations never return
//! `CoreError`: unknown ids are no-ops and conflicts come back as outcome
//! values. `CoreError` is for the checked paths (inserts, reservation
//! transitions, purchase-order status changes).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reservation id is not in the coordinator.
    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    /// Purchase order id is not in the order book.
    #[error("Purchase order not found: {0}")]
    PurchaseOrderNotFound(String),

    /// Order template id is not in the order book.
    #[error("Order template not found: {0}")]
    TemplateNotFound(String),

    /// An insert used an id that already exists.
    #[error("{entity} already exists: {id}")]
    Duplicate { entity: String, id: String },

    /// Reservation status change that is not an edge of the reservation
    /// lifecycle.
    ///
    /// ## When This Occurs
    /// - Seating a reservation that was never confirmed
    /// - Completing a cancelled reservation without reopening it first
    #[error("Reservation {reservation_id} cannot move from {from} to {to}")]
    IllegalReservationTransition {
        reservation_id: String,
        from: String,
        to: String,
    },

    /// Purchase-order status change outside the transition table.
    ///
    /// ## User Workflow
    /// ```text
    /// Order PO-104 (draft)
    ///      │
    ///      ▼
    /// update_status(received)
    ///      │
    ///      ▼
    /// IllegalOrderTransition { from: "draft", to: "received" }
    ///      │
    ///      ▼
    /// Order left unchanged
    /// ```
    #[error("Purchase order {order_id} cannot move from {from} to {to}")]
    IllegalOrderTransition {
        order_id: String,
        from: String,
        to: String,
    },

    /// Bulk update asked for a status not offered by every selected order.
    #[error("Status {status} is not available for every selected order")]
    NoCommonTransition { status: String },

    /// Bulk update called with nothing selected.
    #[error("No purchase orders selected")]
    EmptySelection,

    /// More goods received than were ordered on a line.
    #[error("Cannot receive {received} of {item}: only {ordered} ordered")]
    OverReceipt {
        item: String,
        ordered: i64,
        received: i64,
    },

    /// Receiving call that books in no goods at all.
    #[error("Nothing received for purchase order {0}")]
    EmptyDelivery(String),

    /// Receipt references an item that is not on the order.
    #[error("Item {item_id} is not on purchase order {order_id}")]
    UnknownOrderItem { order_id: String, item_id: String },

    /// Template is switched off.
    #[error("Order template {0} is inactive")]
    InactiveTemplate(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a Duplicate error for an entity kind and id.
    pub fn duplicate(entity: impl Into<String>, id: impl Into<String>) -> Self {
        CoreError::Duplicate {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are the rules the booking and settings forms apply before any
/// coordinator call.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
