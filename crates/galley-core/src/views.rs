//! # Derived Views
//!
//! Pure read-side helpers behind the reservation list, the floor plan and
//! the dashboard cards. Nothing here mutates state.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::types::{Feedback, Reservation, ReservationStatus, Table, TableStatus};

// =============================================================================
// Reservations
// =============================================================================

/// Filter for the reservation list. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    /// Case-insensitive match on customer name or notes.
    pub search: Option<String>,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        if let Some(status) = self.status {
            if reservation.status != status {
                return false;
            }
        }
        if let Some(date) = self.date {
            if reservation.date != date {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                reservation.customer_name.to_lowercase().contains(&term)
                    || reservation
                        .notes
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&term))
            }
        }
    }

    pub fn apply<'a>(&self, reservations: &'a [Reservation]) -> Vec<&'a Reservation> {
        reservations.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Sorts by date, then time, then customer name.
pub fn sort_by_slot(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| {
        a.slot()
            .cmp(&b.slot())
            .then_with(|| a.customer_name.cmp(&b.customer_name))
    });
}

/// Reservations grouped per day, each day in slot order.
pub fn group_by_date(reservations: &[Reservation]) -> BTreeMap<NaiveDate, Vec<Reservation>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Reservation>> = BTreeMap::new();
    for reservation in reservations {
        groups
            .entry(reservation.date)
            .or_default()
            .push(reservation.clone());
    }
    for day in groups.values_mut() {
        sort_by_slot(day);
    }
    groups
}

/// Upcoming reservations whose slot falls within `[now, now + window]`,
/// soonest first. A window past the end of the calendar is open-ended.
pub fn due_soon<'a>(
    reservations: &'a [Reservation],
    now: NaiveDateTime,
    window: Duration,
) -> Vec<&'a Reservation> {
    let until = now
        .checked_add_signed(window)
        .unwrap_or(NaiveDateTime::MAX);
    let mut due: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.status.is_upcoming())
        .filter(|r| {
            let slot = r.slot();
            slot >= now && slot <= until
        })
        .collect();
    due.sort_by_key(|r| r.slot());
    due
}

// =============================================================================
// Tables
// =============================================================================

/// Counts for the floor-plan header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableStatusSummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub unavailable: usize,
    pub total_seats: u32,
}

impl TableStatusSummary {
    pub fn count(&self, status: TableStatus) -> usize {
        match status {
            TableStatus::Available => self.available,
            TableStatus::Occupied => self.occupied,
            TableStatus::Reserved => self.reserved,
            TableStatus::Unavailable => self.unavailable,
        }
    }
}

pub fn table_status_summary(tables: &[Table]) -> TableStatusSummary {
    tables.iter().fold(TableStatusSummary::default(), |mut acc, t| {
        acc.total += 1;
        acc.total_seats += t.capacity;
        match t.status {
            TableStatus::Available => acc.available += 1,
            TableStatus::Occupied => acc.occupied += 1,
            TableStatus::Reserved => acc.reserved += 1,
            TableStatus::Unavailable => acc.unavailable += 1,
        }
        acc
    })
}

/// Tables per section, each section sorted by table number.
pub fn tables_by_section(tables: &[Table]) -> BTreeMap<String, Vec<Table>> {
    let mut sections: BTreeMap<String, Vec<Table>> = BTreeMap::new();
    for table in tables {
        sections
            .entry(table.section.clone())
            .or_default()
            .push(table.clone());
    }
    for section in sections.values_mut() {
        section.sort_by_key(|t| t.number);
    }
    sections
}

// =============================================================================
// Feedback
// =============================================================================

/// Mean star rating, or `None` with no feedback.
pub fn average_rating(feedback: &[Feedback]) -> Option<f64> {
    if feedback.is_empty() {
        return None;
    }
    let sum: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
    Some(f64::from(sum) / feedback.len() as f64)
}
