//! # Floor State
//!
//! Shared handle to the reservation coordinator.
//!
//! ## Thread Safety
//! The coordinator lives in `Arc<Mutex<T>>`: commands and the floor
//! simulator each take the lock for exactly one synchronous coordinator
//! call, so operations never interleave. Never hold the lock across an
//! `.await`; snapshot what you need first.
//!
//! ```text
//!   assign_table ────┐
//!   set_status ──────┼──► lock ──► ReservationCoordinator ──► unlock
//!   simulator tick ──┘
//! ```

use std::sync::{Arc, Mutex};

use galley_core::{ReservationCoordinator, Table, TableStatus};

/// Clonable handle to the coordinator.
#[derive(Debug, Clone)]
pub struct FloorState {
    floor: Arc<Mutex<ReservationCoordinator>>,
}

impl FloorState {
    pub fn new(coordinator: ReservationCoordinator) -> Self {
        FloorState {
            floor: Arc::new(Mutex::new(coordinator)),
        }
    }

    /// Executes a function with read access to the coordinator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let tables = floor.with_floor(|f| f.tables().to_vec());
    /// ```
    pub fn with_floor<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ReservationCoordinator) -> R,
    {
        let floor = self.floor.lock().expect("Floor mutex poisoned");
        f(&floor)
    }

    /// Executes a function with write access to the coordinator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// floor.with_floor_mut(|f| f.assign_table("r-1", "t-4"));
    /// ```
    pub fn with_floor_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ReservationCoordinator) -> R,
    {
        let mut floor = self.floor.lock().expect("Floor mutex poisoned");
        f(&mut floor)
    }
}

impl Default for FloorState {
    fn default() -> Self {
        Self::new(ReservationCoordinator::default())
    }
}

/// Floor plan used when no table settings have been saved yet.
pub fn default_floor() -> Vec<Table> {
    let table = |number: u32, capacity: u32, section: &str, location: &str| Table {
        id: format!("table-{}", number),
        number,
        capacity,
        status: TableStatus::Available,
        section: section.to_string(),
        location: location.to_string(),
    };

    vec![
        table(1, 2, "Main", "window"),
        table(2, 2, "Main", "window"),
        table(3, 4, "Main", "center"),
        table(4, 4, "Main", "center"),
        table(5, 6, "Main", "booth"),
        table(6, 8, "Terrace", "patio"),
        table(7, 2, "Bar", "counter"),
        table(8, 4, "Terrace", "patio"),
    ]
}
