//! # Commands Module
//!
//! Every operation the web UI can call.
//!
//! These are plain library functions. The binary only starts and stops the
//! service; the host serving the UI calls them with the fields of
//! [`crate::Backoffice`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs             ◄─── You are here (exports)
//! ├── table.rs           ◄─── Floor plan, table settings
//! ├── reservation.rs     ◄─── Bookings, assignment, due-soon
//! ├── purchase_order.rs  ◄─── Order status menus, receiving, templates
//! └── config.rs          ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Web UI                                                                 │
//! │  ──────                                                                 │
//! │  call('assign_table', { reservationId: 'r-1', tableId: 'table-4' })    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn assign_table(                                                       │
//! │      floor: &FloorState,      ◄── only the state it needs              │
//! │      reservation_id: &str,                                              │
//! │      table_id: &str,                                                    │
//! │  ) -> Result<Reservation, ApiError>                                     │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Web UI receives: Reservation, or { code, message }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Synchronous commands hold a state lock for one core call. Async
//! commands (table settings) snapshot state before touching the database.

pub mod config;
pub mod purchase_order;
pub mod reservation;
pub mod table;
