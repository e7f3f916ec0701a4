//! # State Module
//!
//! One state type per concern, so each command takes only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────┐ ┌──────────────────┐   │
//! │  │  FloorState  │ │  OrderState  │ │ DbState  │ │   ConfigState    │   │
//! │  │              │ │              │ │          │ │                  │   │
//! │  │  Arc<Mutex<  │ │  Arc<Mutex<  │ │ Database │ │  restaurant name │   │
//! │  │  Reservation │ │  PurchaseOrd │ │ (SQLite  │ │  simulator knobs │   │
//! │  │  Coordinator │ │  erBook>>    │ │  pool)   │ │                  │   │
//! │  │  >>          │ │              │ │          │ │                  │   │
//! │  └──────┬───────┘ └──────────────┘ └──────────┘ └──────────────────┘   │
//! │         │ shared with                                                   │
//! │         ▼                                                               │
//! │  ┌──────────────────┐                                                   │
//! │  │  SimulatorState  │  start-once / stop for the floor simulator        │
//! │  └──────────────────┘                                                   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • FloorState / OrderState: one synchronous operation per lock          │
//! │  • DbState: pool is thread-safe                                         │
//! │  • ConfigState: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod floor;
mod orders;
mod simulator;

pub use config::{ConfigError, ConfigState, SimulatorSettings};
pub use db::DbState;
pub use floor::{default_floor, FloorState};
pub use orders::OrderState;
pub use simulator::SimulatorState;
