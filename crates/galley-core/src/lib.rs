//! # galley-core: Pure Back-of-House Logic for Galley
//!
//! Everything the floor and purchasing screens decide lives here, as plain
//! synchronous code with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Galley Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web UI (toasts, floor plan)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    backoffice (service)                         │   │
//! │  │    assign_table, update_order_status, floor simulator, etc.     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ galley-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐  ┌──────────────┐  ┌──────────┐  ┌────────┐  │   │
//! │  │   │ coordinator │  │purchase_order│  │ template │  │ views  │  │   │
//! │  │   │ tables +    │  │ transitions  │  │ recurring│  │ filter │  │   │
//! │  │   │ reservations│  │ menus, bulk  │  │ orders   │  │ summary│  │   │
//! │  │   └─────────────┘  └──────────────┘  └──────────┘  └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO ASYNC                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 galley-store (table settings)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Table, Reservation, PurchaseOrder, ...)
//! - [`coordinator`] - Table assignment, conflicts, availability
//! - [`purchase_order`] - Order transition table, menus, order book
//! - [`template`] - Recurring order templates
//! - [`views`] - Filters, groupings and summaries
//! - [`notify`] - Notification side channel
//! - [`money`] - Integer-cent money
//! - [`validation`] - Form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use galley_core::PurchaseOrderStatus;
//!
//! // Received orders are final
//! assert!(PurchaseOrderStatus::Received.next_statuses().is_empty());
//! assert!(PurchaseOrderStatus::Shipped.can_transition_to(PurchaseOrderStatus::Received));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coordinator;
pub mod error;
pub mod money;
pub mod notify;
pub mod purchase_order;
pub mod template;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coordinator::{
    AssignOutcome, ConflictCheck, ReservationCoordinator, ReservationUpdate, TableUpdate,
    UnassignOutcome,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notify::{Notification, NotificationKind, Notifier};
pub use purchase_order::{ItemReceipt, PurchaseOrderBook, StatusAction, StatusMenu};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest party bookable as a regular reservation.
///
/// Bigger groups go through the events screen.
pub const MAX_PARTY_SIZE: u32 = 20;

/// Most seats a single table may have.
pub const MAX_TABLE_CAPACITY: u32 = 20;

/// Settings key under which the table list is persisted.
pub const TABLES_STORAGE_KEY: &str = "restaurant-tables";
