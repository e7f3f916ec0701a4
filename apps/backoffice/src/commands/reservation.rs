//! # Reservation Commands
//!
//! Booking, status changes and table assignment.
//!
//! ## Assignment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host drags table 4 onto Ada's 19:00 booking                           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  call('assign_table', { reservationId, tableId })                      │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  coordinator.assign_table                                      │    │
//! │  │    Assigned / AlreadyAssigned ──► updated reservation          │    │
//! │  │    Conflict ──────────────────► CONFLICT, nothing changed      │    │
//! │  │    not found ─────────────────► NOT_FOUND, nothing changed     │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

use galley_core::validation::{
    validate_date, validate_new_reservation, validate_party_size, validate_time,
};
use galley_core::views::{self, ReservationFilter};
use galley_core::{AssignOutcome, Reservation, ReservationStatus, Table, UnassignOutcome};

use crate::error::ApiError;
use crate::state::{ConfigState, FloorState};

/// Input for the booking form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservationInput {
    /// Existing customer. A walk-in booking gets a fresh id.
    pub customer_id: Option<String>,
    pub customer_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub party_size: u32,
    pub notes: Option<String>,
    pub special_requests: Option<String>,
}

/// Reservations matching the filter, in slot order.
pub fn list_reservations(floor: &FloorState, filter: &ReservationFilter) -> Vec<Reservation> {
    debug!(?filter, "list_reservations command");
    let mut reservations: Vec<Reservation> =
        floor.with_floor(|f| filter.apply(f.reservations()).into_iter().cloned().collect());
    views::sort_by_slot(&mut reservations);
    reservations
}

/// Matching reservations grouped per day, each day in slot order.
pub fn reservations_by_date(
    floor: &FloorState,
    filter: &ReservationFilter,
) -> BTreeMap<NaiveDate, Vec<Reservation>> {
    let matching: Vec<Reservation> =
        floor.with_floor(|f| filter.apply(f.reservations()).into_iter().cloned().collect());
    views::group_by_date(&matching)
}

/// Books a new pending reservation with no tables.
pub fn create_reservation(
    floor: &FloorState,
    input: NewReservationInput,
) -> Result<Reservation, ApiError> {
    debug!(customer = %input.customer_name, date = %input.date, time = %input.time, "create_reservation command");

    let (date, time) = validate_new_reservation(
        &input.customer_name,
        &input.date,
        &input.time,
        input.party_size,
        input.notes.as_deref(),
    )?;

    let now = Utc::now();
    let reservation = Reservation {
        id: Uuid::new_v4().to_string(),
        customer_id: input
            .customer_id
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        customer_name: input.customer_name.trim().to_string(),
        date,
        time,
        party_size: input.party_size,
        table_ids: Vec::new(),
        status: ReservationStatus::Pending,
        notes: input.notes,
        special_requests: input.special_requests,
        created_at: now,
        updated_at: now,
    };

    floor.with_floor_mut(|f| f.add_reservation(reservation.clone()))?;
    Ok(reservation)
}

/// Moves a reservation along its lifecycle (confirm, seat, complete...).
pub fn change_reservation_status(
    floor: &FloorState,
    reservation_id: &str,
    status: ReservationStatus,
) -> Result<Reservation, ApiError> {
    debug!(%reservation_id, %status, "change_reservation_status command");

    floor.with_floor_mut(|f| {
        f.transition_reservation(reservation_id, status)?;
        current(f, reservation_id)
    })
}

/// Adds a table to a reservation.
pub fn assign_table(
    floor: &FloorState,
    reservation_id: &str,
    table_id: &str,
) -> Result<Reservation, ApiError> {
    debug!(%reservation_id, %table_id, "assign_table command");

    floor.with_floor_mut(|f| match f.assign_table(reservation_id, table_id) {
        AssignOutcome::Assigned | AssignOutcome::AlreadyAssigned => current(f, reservation_id),
        AssignOutcome::Conflict(check) => {
            warn!(%reservation_id, %table_id, conflicting = ?check.conflicting_reservation_id, "Booking conflict");
            Err(ApiError::conflict(
                check
                    .message
                    .unwrap_or_else(|| "Table already booked".to_string()),
            ))
        }
        AssignOutcome::ReservationNotFound => {
            Err(ApiError::not_found("Reservation", reservation_id))
        }
        AssignOutcome::TableNotFound => Err(ApiError::not_found("Table", table_id)),
    })
}

/// Removes a table from a reservation. Removing a table the reservation
/// does not hold changes nothing.
pub fn unassign_table(
    floor: &FloorState,
    reservation_id: &str,
    table_id: &str,
) -> Result<Reservation, ApiError> {
    debug!(%reservation_id, %table_id, "unassign_table command");

    floor.with_floor_mut(|f| match f.unassign_table(reservation_id, table_id) {
        UnassignOutcome::Unassigned | UnassignOutcome::NotAssigned => current(f, reservation_id),
        UnassignOutcome::ReservationNotFound => {
            Err(ApiError::not_found("Reservation", reservation_id))
        }
    })
}

/// Tables that could seat the party at the slot.
pub fn available_tables(
    floor: &FloorState,
    party_size: u32,
    date: &str,
    time: &str,
) -> Result<Vec<Table>, ApiError> {
    validate_party_size(party_size)?;
    let date = validate_date(date)?;
    let time = validate_time(time)?;

    Ok(floor.with_floor(|f| f.get_available_tables(party_size, date, time)))
}

/// Upcoming reservations inside the configured due-soon window.
pub fn due_soon(floor: &FloorState, config: &ConfigState, now: NaiveDateTime) -> Vec<Reservation> {
    let window = config.simulator.due_soon_window();
    floor.with_floor(|f| {
        views::due_soon(f.reservations(), now, window)
            .into_iter()
            .cloned()
            .collect()
    })
}

fn current(
    floor: &galley_core::ReservationCoordinator,
    reservation_id: &str,
) -> Result<Reservation, ApiError> {
    floor
        .reservation(reservation_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Reservation", reservation_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::default_floor;
    use galley_core::{ReservationCoordinator, TableStatus};

    fn floor() -> FloorState {
        FloorState::new(ReservationCoordinator::new(default_floor(), vec![]))
    }

    fn book(floor: &FloorState, name: &str, time: &str) -> Reservation {
        create_reservation(
            floor,
            NewReservationInput {
                customer_id: None,
                customer_name: name.to_string(),
                date: "2025-05-03".to_string(),
                time: time.to_string(),
                party_size: 2,
                notes: None,
                special_requests: None,
            },
        )
        .unwrap()
    }

    fn table_status(floor: &FloorState, id: &str) -> Option<TableStatus> {
        floor.with_floor(|f| f.table(id).map(|t| t.status))
    }

    #[test]
    fn test_create_reservation() {
        let floor = floor();
        let r = book(&floor, "  Ada Moreno ", "19:00");

        assert_eq!(r.status, ReservationStatus::Pending);
        assert_eq!(r.customer_name, "Ada Moreno");
        assert!(r.table_ids.is_empty());
        assert_eq!(list_reservations(&floor, &ReservationFilter::default()), vec![r]);
    }

    #[test]
    fn test_create_reservation_rejects_bad_input() {
        let err = create_reservation(
            &floor(),
            NewReservationInput {
                customer_id: None,
                customer_name: "Ada".to_string(),
                date: "2025-05-03".to_string(),
                time: "7pm".to_string(),
                party_size: 2,
                notes: None,
                special_requests: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_same_slot_conflict_leaves_everything_unchanged() {
        let floor = floor();
        let r1 = book(&floor, "Ada Moreno", "19:00");
        let r2 = book(&floor, "Bo Lindqvist", "19:00");

        let assigned = assign_table(&floor, &r1.id, "table-1").unwrap();
        assert_eq!(assigned.table_ids, vec!["table-1".to_string()]);
        assert_eq!(table_status(&floor, "table-1"), Some(TableStatus::Reserved));

        let err = assign_table(&floor, &r2.id, "table-1").unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert!(err.message.contains("Ada Moreno"));
        assert!(err.message.contains("19:00"));

        let r2_after = floor.with_floor(|f| f.reservation(&r2.id).cloned()).unwrap();
        assert!(r2_after.table_ids.is_empty());
        assert_eq!(table_status(&floor, "table-1"), Some(TableStatus::Reserved));
    }

    #[test]
    fn test_assign_is_idempotent_and_unassign_round_trips() {
        let floor = floor();
        let r = book(&floor, "Ada Moreno", "19:00");

        assign_table(&floor, &r.id, "table-2").unwrap();
        let again = assign_table(&floor, &r.id, "table-2").unwrap();
        assert_eq!(again.table_ids.len(), 1);

        let freed = unassign_table(&floor, &r.id, "table-2").unwrap();
        assert!(freed.table_ids.is_empty());
        assert_eq!(table_status(&floor, "table-2"), Some(TableStatus::Available));

        // Not held: nothing to do
        let unchanged = unassign_table(&floor, &r.id, "table-2").unwrap();
        assert_eq!(unchanged, freed);
    }

    #[test]
    fn test_assign_not_found() {
        let floor = floor();
        let r = book(&floor, "Ada Moreno", "19:00");

        assert_eq!(
            assign_table(&floor, "missing", "table-1").unwrap_err().code,
            ErrorCode::NotFound
        );
        assert_eq!(
            assign_table(&floor, &r.id, "missing").unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_status_changes_drive_tables() {
        let floor = floor();
        let r = book(&floor, "Ada Moreno", "19:00");
        assign_table(&floor, &r.id, "table-3").unwrap();

        change_reservation_status(&floor, &r.id, ReservationStatus::Confirmed).unwrap();
        let seated = change_reservation_status(&floor, &r.id, ReservationStatus::Seated).unwrap();
        assert_eq!(seated.status, ReservationStatus::Seated);
        assert_eq!(table_status(&floor, "table-3"), Some(TableStatus::Occupied));

        change_reservation_status(&floor, &r.id, ReservationStatus::Completed).unwrap();
        assert_eq!(table_status(&floor, "table-3"), Some(TableStatus::Available));

        let err =
            change_reservation_status(&floor, &r.id, ReservationStatus::Seated).unwrap_err();
        assert_eq!(err.code, ErrorCode::IllegalTransition);
    }

    #[test]
    fn test_available_tables_excludes_held_and_small() {
        let floor = floor();
        let r = book(&floor, "Ada Moreno", "19:00");
        assign_table(&floor, &r.id, "table-3").unwrap();

        let tables = available_tables(&floor, 4, "2025-05-03", "19:00").unwrap();
        assert!(tables.iter().all(|t| t.capacity >= 4));
        assert!(tables.iter().all(|t| t.id != "table-3"));

        // Same table is free one slot later
        let later = available_tables(&floor, 4, "2025-05-03", "20:00").unwrap();
        assert!(later.iter().any(|t| t.id == "table-3"));

        assert_eq!(
            available_tables(&floor, 0, "2025-05-03", "19:00").unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_due_soon_uses_configured_window() {
        let floor = floor();
        let soon = book(&floor, "Ada Moreno", "19:00");
        book(&floor, "Bo Lindqvist", "20:30");

        let now = NaiveDate::from_ymd_opt(2025, 5, 3)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        let due = due_soon(&floor, &ConfigState::default(), now);
        assert_eq!(due, vec![soon]);
    }

    #[test]
    fn test_list_reservations_filters_and_sorts() {
        let floor = floor();
        let late = book(&floor, "Cy Okafor", "21:00");
        let early = book(&floor, "Ada Moreno", "18:00");
        change_reservation_status(&floor, &early.id, ReservationStatus::Confirmed).unwrap();

        let all = list_reservations(&floor, &ReservationFilter::default());
        assert_eq!(all[0].id, early.id);
        assert_eq!(all[1].id, late.id);

        let pending = list_reservations(
            &floor,
            &ReservationFilter {
                status: Some(ReservationStatus::Pending),
                ..Default::default()
            },
        );
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, late.id);

        let by_date = reservations_by_date(&floor, &ReservationFilter::default());
        assert_eq!(by_date.len(), 1);
        assert_eq!(by_date.values().next().unwrap()[0].id, early.id);
    }
}
