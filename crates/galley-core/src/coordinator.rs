//! # Reservation/Table Coordinator
//!
//! Single source of truth for the floor: the table list and the reservation
//! list. Every screen mutates through here so the conflict rule is applied
//! the same way everywhere.
//!
//! ## Table Assignment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  assign_table(reservation_id, table_id)                                 │
//! │       │                                                                 │
//! │       ├── reservation unknown? ──────────► ReservationNotFound (no-op)  │
//! │       ├── table unknown? ────────────────► TableNotFound (no-op)        │
//! │       ├── table already held? ───────────► AlreadyAssigned (no-op)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  candidate = reservation + table_id                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  detect_conflicts(candidate)                                            │
//! │       │                                                                 │
//! │       ├── same slot, other reservation holds it? ─► "Booking conflict"  │
//! │       │                                              Conflict (no-op)   │
//! │       ▼                                                                 │
//! │  update_reservation(candidate)   ──► "Reservation updated"              │
//! │  update_table(table → reserved)  ──► "Table N is now reserved"          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Assigned                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! The basic operations never fail: unknown ids are ignored and conflicts
//! abort quietly apart from the notification. Each call still returns an
//! outcome value so callers can tell what happened without watching the
//! notification stream.
//!
//! Capacity is not checked by `assign_table`; callers pick tables from
//! [`ReservationCoordinator::get_available_tables`] first.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::notify::{NoOpNotifier, Notification, Notifier};
use crate::types::{Reservation, ReservationStatus, Table, TableStatus};

// =============================================================================
// Outcomes
// =============================================================================

/// Result of a conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConflictCheck {
    pub has_conflict: bool,
    /// Names the conflicting customer and time.
    pub message: Option<String>,
    pub conflicting_reservation_id: Option<String>,
}

impl ConflictCheck {
    fn clear() -> Self {
        ConflictCheck {
            has_conflict: false,
            message: None,
            conflicting_reservation_id: None,
        }
    }

    fn with(other: &Reservation) -> Self {
        ConflictCheck {
            has_conflict: true,
            message: Some(format!(
                "Table already booked for {} at {}",
                other.customer_name,
                other.time.format("%H:%M")
            )),
            conflicting_reservation_id: Some(other.id.clone()),
        }
    }
}

/// What `update_reservation` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationUpdate {
    Updated,
    NotFound,
}

/// What `update_table` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableUpdate {
    Updated,
    NotFound,
}

/// What `assign_table` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    AlreadyAssigned,
    Conflict(ConflictCheck),
    ReservationNotFound,
    TableNotFound,
}

/// What `unassign_table` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnassignOutcome {
    Unassigned,
    NotAssigned,
    ReservationNotFound,
}

// =============================================================================
// Coordinator
// =============================================================================

/// Owns the canonical table and reservation lists.
pub struct ReservationCoordinator {
    tables: Vec<Table>,
    reservations: Vec<Reservation>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for ReservationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationCoordinator")
            .field("tables", &self.tables.len())
            .field("reservations", &self.reservations.len())
            .finish()
    }
}

impl Default for ReservationCoordinator {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl ReservationCoordinator {
    /// Creates a coordinator that discards notifications.
    pub fn new(tables: Vec<Table>, reservations: Vec<Reservation>) -> Self {
        Self::with_notifier(tables, reservations, Arc::new(NoOpNotifier))
    }

    /// Creates a coordinator that reports through `notifier`.
    pub fn with_notifier(
        tables: Vec<Table>,
        reservations: Vec<Reservation>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        ReservationCoordinator {
            tables,
            reservations,
            notifier,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Replaces the whole table list (loading saved table settings).
    pub fn replace_tables(&mut self, tables: Vec<Table>) {
        self.tables = tables;
    }

    // -------------------------------------------------------------------------
    // Inserts
    // -------------------------------------------------------------------------

    /// Adds a new reservation. Ids must be unique.
    pub fn add_reservation(&mut self, reservation: Reservation) -> CoreResult<()> {
        if self.reservation(&reservation.id).is_some() {
            return Err(CoreError::duplicate("Reservation", reservation.id));
        }

        self.notifier.notify(Notification::success(
            "Reservation added",
            format!(
                "Reservation for {} on {} at {} has been created.",
                reservation.customer_name,
                reservation.date,
                reservation.time.format("%H:%M")
            ),
        ));
        self.reservations.push(reservation);
        Ok(())
    }

    /// Adds a new table. Ids must be unique.
    pub fn add_table(&mut self, table: Table) -> CoreResult<()> {
        if self.table(&table.id).is_some() {
            return Err(CoreError::duplicate("Table", table.id));
        }

        self.notifier.notify(Notification::success(
            "Table added",
            format!("Table {} added to {}.", table.number, table.section),
        ));
        self.tables.push(table);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Updates
    // -------------------------------------------------------------------------

    /// Replaces the reservation with the same id.
    ///
    /// No validation and no transition check: the caller passes the full
    /// record it wants stored.
    pub fn update_reservation(&mut self, reservation: Reservation) -> ReservationUpdate {
        let Some(slot) = self.reservations.iter_mut().find(|r| r.id == reservation.id) else {
            return ReservationUpdate::NotFound;
        };

        self.notifier.notify(Notification::success(
            "Reservation updated",
            format!(
                "Reservation for {} has been updated.",
                reservation.customer_name
            ),
        ));
        *slot = reservation;
        ReservationUpdate::Updated
    }

    /// Replaces the table with the same id.
    pub fn update_table(&mut self, table: Table) -> TableUpdate {
        let Some(slot) = self.tables.iter_mut().find(|t| t.id == table.id) else {
            return TableUpdate::NotFound;
        };

        self.notifier.notify(Notification::success(
            "Table updated",
            format!("Table {} is now {}.", table.number, table.status),
        ));
        *slot = table;
        TableUpdate::Updated
    }

    /// Changes only the status of a table.
    pub fn set_table_status(&mut self, table_id: &str, status: TableStatus) -> TableUpdate {
        match self.table(table_id) {
            Some(table) => {
                let updated = table.with_status(status);
                self.update_table(updated)
            }
            None => TableUpdate::NotFound,
        }
    }

    // -------------------------------------------------------------------------
    // Conflicts & Assignment
    // -------------------------------------------------------------------------

    /// Checks whether any other reservation at the same slot already holds
    /// one of the candidate's tables.
    pub fn detect_conflicts(&self, candidate: &Reservation) -> ConflictCheck {
        self.reservations
            .iter()
            .filter(|other| other.id != candidate.id && other.shares_slot_with(candidate))
            .find(|other| candidate.table_ids.iter().any(|t| other.holds_table(t)))
            .map(ConflictCheck::with)
            .unwrap_or_else(ConflictCheck::clear)
    }

    /// Adds a table to a reservation and marks the table reserved.
    pub fn assign_table(&mut self, reservation_id: &str, table_id: &str) -> AssignOutcome {
        let Some(reservation) = self.reservation(reservation_id) else {
            return AssignOutcome::ReservationNotFound;
        };
        if reservation.holds_table(table_id) {
            return AssignOutcome::AlreadyAssigned;
        }
        let Some(table) = self.table(table_id) else {
            return AssignOutcome::TableNotFound;
        };
        let reserved_table = table.with_status(TableStatus::Reserved);

        let mut candidate = reservation.clone();
        candidate.table_ids.push(table_id.to_string());

        let check = self.detect_conflicts(&candidate);
        if check.has_conflict {
            self.notifier.notify(Notification::error(
                "Booking conflict",
                check.message.clone().unwrap_or_default(),
            ));
            return AssignOutcome::Conflict(check);
        }

        self.update_reservation(candidate);
        self.update_table(reserved_table);
        AssignOutcome::Assigned
    }

    /// Removes a table from a reservation and frees the table.
    pub fn unassign_table(&mut self, reservation_id: &str, table_id: &str) -> UnassignOutcome {
        let Some(reservation) = self.reservation(reservation_id) else {
            return UnassignOutcome::ReservationNotFound;
        };
        if !reservation.holds_table(table_id) {
            return UnassignOutcome::NotAssigned;
        }

        let mut updated = reservation.clone();
        updated.table_ids.retain(|id| id != table_id);

        self.update_reservation(updated);
        self.set_table_status(table_id, TableStatus::Available);
        UnassignOutcome::Unassigned
    }

    /// Tables that can be offered to a party at a slot.
    ///
    /// ## Rules
    /// - capacity ≥ party size
    /// - status is `available` or `reserved`
    /// - not held by any reservation at exactly this date+time
    pub fn get_available_tables(
        &self,
        party_size: u32,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Vec<Table> {
        let held_at_slot: Vec<&str> = self
            .reservations
            .iter()
            .filter(|r| r.is_at(date, time))
            .flat_map(|r| r.table_ids.iter().map(String::as_str))
            .collect();

        self.tables
            .iter()
            .filter(|t| t.seats(party_size))
            .filter(|t| t.status.is_offerable())
            .filter(|t| !held_at_slot.contains(&t.id.as_str()))
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Checked Status Changes
    // -------------------------------------------------------------------------

    /// Moves a reservation along its lifecycle and updates held tables.
    ///
    /// ## Table Side Effects
    /// - seated → held tables become `occupied`
    /// - completed / cancelled / no-show → held tables become `available`
    ///   and are dropped from the reservation, so the slot can be rebooked
    /// - reopened (→ pending) → tables untouched
    pub fn transition_reservation(
        &mut self,
        reservation_id: &str,
        next: ReservationStatus,
    ) -> CoreResult<()> {
        let reservation = self
            .reservation(reservation_id)
            .ok_or_else(|| CoreError::ReservationNotFound(reservation_id.to_string()))?;

        if !reservation.status.can_transition_to(next) {
            return Err(CoreError::IllegalReservationTransition {
                reservation_id: reservation_id.to_string(),
                from: reservation.status.to_string(),
                to: next.to_string(),
            });
        }

        let table_status = match next {
            ReservationStatus::Seated => Some(TableStatus::Occupied),
            ReservationStatus::Completed
            | ReservationStatus::Cancelled
            | ReservationStatus::NoShow => Some(TableStatus::Available),
            ReservationStatus::Pending | ReservationStatus::Confirmed => None,
        };

        let mut updated = Reservation {
            status: next,
            ..reservation.clone()
        };
        let held = if table_status == Some(TableStatus::Available) {
            std::mem::take(&mut updated.table_ids)
        } else {
            updated.table_ids.clone()
        };
        self.update_reservation(updated);

        if let Some(status) = table_status {
            for table_id in &held {
                self.set_table_status(table_id, status);
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationKind, RecordingNotifier};
    use chrono::Utc;

    fn table(id: &str, number: u32, capacity: u32) -> Table {
        Table {
            id: id.to_string(),
            number,
            capacity,
            status: TableStatus::Available,
            section: "Main".to_string(),
            location: "window".to_string(),
        }
    }

    fn reservation(id: &str, name: &str, date: &str, time: &str, party: u32) -> Reservation {
        Reservation {
            id: id.to_string(),
            customer_id: format!("c-{}", id),
            customer_name: name.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            party_size: party,
            table_ids: vec![],
            status: ReservationStatus::Confirmed,
            notes: None,
            special_requests: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn slot(date: &str, time: &str) -> (NaiveDate, NaiveTime) {
        (
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        )
    }

    /// T1 (4 seats), T2 (2 seats), T3 (6 seats); R1 and R2 both at
    /// 2025-05-03 19:00, R3 at 20:00.
    fn floor() -> (ReservationCoordinator, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let coordinator = ReservationCoordinator::with_notifier(
            vec![table("t1", 1, 4), table("t2", 2, 2), table("t3", 3, 6)],
            vec![
                reservation("r1", "Ada Moreno", "2025-05-03", "19:00", 4),
                reservation("r2", "Ben Okafor", "2025-05-03", "19:00", 2),
                reservation("r3", "Cleo Park", "2025-05-03", "20:00", 4),
            ],
            notifier.clone(),
        );
        (coordinator, notifier)
    }

    #[test]
    fn test_assign_table_reserves_it() {
        let (mut floor, notifier) = floor();

        assert_eq!(floor.assign_table("r1", "t1"), AssignOutcome::Assigned);

        assert_eq!(floor.reservation("r1").unwrap().table_ids, vec!["t1"]);
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Reserved);

        let seen = notifier.notifications();
        assert_eq!(seen[0].title, "Reservation updated");
        assert_eq!(seen[1].message, "Table 1 is now reserved.");
    }

    #[test]
    fn test_conflicting_assignment_leaves_state_unchanged() {
        let (mut floor, notifier) = floor();
        floor.assign_table("r1", "t1");
        floor.set_table_status("t1", TableStatus::Occupied);
        notifier.clear();

        let outcome = floor.assign_table("r2", "t1");

        match outcome {
            AssignOutcome::Conflict(check) => {
                assert!(check.has_conflict);
                assert_eq!(
                    check.message.as_deref(),
                    Some("Table already booked for Ada Moreno at 19:00")
                );
                assert_eq!(check.conflicting_reservation_id.as_deref(), Some("r1"));
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        assert!(floor.reservation("r2").unwrap().table_ids.is_empty());
        assert_eq!(floor.reservation("r1").unwrap().table_ids, vec!["t1"]);
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Occupied);

        let seen = notifier.notifications();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::Error);
        assert_eq!(seen[0].title, "Booking conflict");
    }

    #[test]
    fn test_same_table_different_slot_is_not_a_conflict() {
        let (mut floor, _) = floor();
        floor.assign_table("r1", "t1");

        assert_eq!(floor.assign_table("r3", "t1"), AssignOutcome::Assigned);
        assert_eq!(floor.reservation("r3").unwrap().table_ids, vec!["t1"]);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let (mut floor, notifier) = floor();
        floor.assign_table("r1", "t1");
        let tables_once = floor.tables().to_vec();
        let reservations_once = floor.reservations().to_vec();
        notifier.clear();

        assert_eq!(floor.assign_table("r1", "t1"), AssignOutcome::AlreadyAssigned);

        assert_eq!(floor.tables(), tables_once.as_slice());
        assert_eq!(floor.reservations(), reservations_once.as_slice());
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_unassign_then_assign_round_trips() {
        let (mut floor, _) = floor();
        floor.assign_table("r1", "t1");
        floor.assign_table("r1", "t3");
        let tables_before = floor.tables().to_vec();

        assert_eq!(floor.unassign_table("r1", "t1"), UnassignOutcome::Unassigned);
        assert_eq!(floor.reservation("r1").unwrap().table_ids, vec!["t3"]);
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Available);

        assert_eq!(floor.assign_table("r1", "t1"), AssignOutcome::Assigned);
        let held = &floor.reservation("r1").unwrap().table_ids;
        assert!(held.contains(&"t1".to_string()) && held.contains(&"t3".to_string()));
        assert_eq!(floor.tables(), tables_before.as_slice());
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let (mut floor, notifier) = floor();

        assert_eq!(floor.assign_table("nope", "t1"), AssignOutcome::ReservationNotFound);
        assert_eq!(floor.assign_table("r1", "nope"), AssignOutcome::TableNotFound);
        assert_eq!(floor.unassign_table("nope", "t1"), UnassignOutcome::ReservationNotFound);
        assert_eq!(floor.unassign_table("r1", "t2"), UnassignOutcome::NotAssigned);
        assert_eq!(
            floor.update_table(table("nope", 9, 2)),
            TableUpdate::NotFound
        );
        assert_eq!(
            floor.update_reservation(reservation("nope", "X", "2025-05-03", "19:00", 2)),
            ReservationUpdate::NotFound
        );

        assert!(notifier.notifications().is_empty());
        assert!(floor.tables().iter().all(|t| t.status == TableStatus::Available));
    }

    #[test]
    fn test_update_table_round_trip_keeps_linkage() {
        let (mut floor, notifier) = floor();
        floor.assign_table("r1", "t2");
        let original = floor.table("t1").unwrap().clone();
        let reservations_before = floor.reservations().to_vec();

        floor.update_table(original.with_status(TableStatus::Occupied));
        assert_eq!(notifier.last().unwrap().message, "Table 1 is now occupied.");
        floor.update_table(original.with_status(TableStatus::Available));

        assert_eq!(floor.table("t1").unwrap(), &original);
        assert_eq!(floor.reservations(), reservations_before.as_slice());
    }

    #[test]
    fn test_available_tables_respect_capacity_status_and_slot() {
        let (mut floor, _) = floor();
        floor.assign_table("r1", "t1");
        floor.set_table_status("t2", TableStatus::Unavailable);
        let (date, time) = slot("2025-05-03", "19:00");

        let available = floor.get_available_tables(2, date, time);
        let ids: Vec<&str> = available.iter().map(|t| t.id.as_str()).collect();
        // t1 held at this slot, t2 unavailable
        assert_eq!(ids, vec!["t3"]);

        // At 20:00 t1 is free at the slot and offered even though reserved
        let (date, later) = slot("2025-05-03", "20:00");
        let ids: Vec<String> = floor
            .get_available_tables(4, date, later)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["t1", "t3"]);

        for t in floor.get_available_tables(5, date, later) {
            assert!(t.capacity >= 5);
        }
    }

    #[test]
    fn test_available_tables_are_recomputed_each_call() {
        let (mut floor, _) = floor();
        let (date, time) = slot("2025-05-03", "19:00");

        assert_eq!(floor.get_available_tables(2, date, time).len(), 3);
        floor.assign_table("r2", "t2");
        assert_eq!(floor.get_available_tables(2, date, time).len(), 2);
        floor.unassign_table("r2", "t2");
        assert_eq!(floor.get_available_tables(2, date, time).len(), 3);
    }

    #[test]
    fn test_detect_conflicts_ignores_self() {
        let (mut floor, _) = floor();
        floor.assign_table("r1", "t1");

        let own = floor.reservation("r1").unwrap().clone();
        assert!(!floor.detect_conflicts(&own).has_conflict);

        let mut other = floor.reservation("r2").unwrap().clone();
        other.table_ids.push("t1".to_string());
        assert!(floor.detect_conflicts(&other).has_conflict);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let (mut floor, _) = floor();
        assert!(matches!(
            floor.add_table(table("t1", 1, 4)),
            Err(CoreError::Duplicate { .. })
        ));
        assert!(floor.add_table(table("t4", 4, 8)).is_ok());
        assert!(floor
            .add_reservation(reservation("r1", "Dup", "2025-05-03", "19:00", 2))
            .is_err());
        assert_eq!(floor.tables().len(), 4);
    }

    #[test]
    fn test_transition_reservation_updates_tables() {
        let (mut floor, _) = floor();
        floor.assign_table("r1", "t1");

        floor
            .transition_reservation("r1", ReservationStatus::Seated)
            .unwrap();
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Occupied);

        floor
            .transition_reservation("r1", ReservationStatus::Completed)
            .unwrap();
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Available);
        assert_eq!(
            floor.reservation("r1").unwrap().status,
            ReservationStatus::Completed
        );
        assert!(floor.reservation("r1").unwrap().table_ids.is_empty());

        // Reopen leaves tables alone
        floor
            .transition_reservation("r1", ReservationStatus::Pending)
            .unwrap();
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Available);
    }

    #[test]
    fn test_cancelled_reservation_frees_its_slot() {
        let (mut floor, _) = floor();
        floor.assign_table("r1", "t1");
        let (date, time) = slot("2025-05-03", "19:00");

        floor
            .transition_reservation("r1", ReservationStatus::Cancelled)
            .unwrap();

        assert!(floor.reservation("r1").unwrap().table_ids.is_empty());
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Available);
        assert!(floor
            .get_available_tables(4, date, time)
            .iter()
            .any(|t| t.id == "t1"));
        assert_eq!(floor.assign_table("r2", "t1"), AssignOutcome::Assigned);
        assert_eq!(floor.reservation("r2").unwrap().table_ids, vec!["t1"]);
    }

    #[test]
    fn test_no_show_releases_every_held_table() {
        let (mut floor, _) = floor();
        floor.assign_table("r1", "t1");
        floor.assign_table("r1", "t3");

        floor
            .transition_reservation("r1", ReservationStatus::NoShow)
            .unwrap();

        assert!(floor.reservation("r1").unwrap().table_ids.is_empty());
        assert_eq!(floor.table("t1").unwrap().status, TableStatus::Available);
        assert_eq!(floor.table("t3").unwrap().status, TableStatus::Available);
    }

    #[test]
    fn test_transition_reservation_rejects_illegal_edges() {
        let (mut floor, _) = floor();
        floor
            .transition_reservation("r1", ReservationStatus::Cancelled)
            .unwrap();

        let err = floor
            .transition_reservation("r1", ReservationStatus::Seated)
            .unwrap_err();
        assert!(matches!(err, CoreError::IllegalReservationTransition { .. }));
        assert_eq!(
            floor.reservation("r1").unwrap().status,
            ReservationStatus::Cancelled
        );

        assert!(matches!(
            floor.transition_reservation("nope", ReservationStatus::Seated),
            Err(CoreError::ReservationNotFound(_))
        ));
    }

    #[test]
    fn test_update_reservation_does_not_check_transitions() {
        let (mut floor, _) = floor();
        let mut r = floor.reservation("r1").unwrap().clone();
        r.status = ReservationStatus::Completed;
        assert_eq!(floor.update_reservation(r), ReservationUpdate::Updated);

        let mut r = floor.reservation("r1").unwrap().clone();
        r.status = ReservationStatus::Seated;
        assert_eq!(floor.update_reservation(r), ReservationUpdate::Updated);
        assert_eq!(
            floor.reservation("r1").unwrap().status,
            ReservationStatus::Seated
        );
    }
}
