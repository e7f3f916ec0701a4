//! # Table Commands
//!
//! Floor-plan edits and the persisted table settings.
//!
//! ```text
//!   startup ──► load_table_settings ──► FloorState ◄── add_table
//!                                            │         update_table_status
//!                                            ▼
//!                                  save_table_settings ──► settings table
//!                                                          ("restaurant-tables")
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};
use uuid::Uuid;

use galley_core::validation::validate_new_table;
use galley_core::views::{self, TableStatusSummary};
use galley_core::{Table, TableStatus, TableUpdate};

use crate::error::ApiError;
use crate::state::{DbState, FloorState};

/// Input for the "add table" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTableInput {
    pub number: u32,
    pub capacity: u32,
    pub section: String,
    #[serde(default)]
    pub location: String,
}

/// Lists every table in floor-plan order.
pub fn list_tables(floor: &FloorState) -> Vec<Table> {
    debug!("list_tables command");
    floor.with_floor(|f| f.tables().to_vec())
}

/// Counts per status for the floor-plan header.
pub fn table_summary(floor: &FloorState) -> TableStatusSummary {
    floor.with_floor(|f| views::table_status_summary(f.tables()))
}

/// Tables grouped per service section.
pub fn tables_by_section(floor: &FloorState) -> BTreeMap<String, Vec<Table>> {
    floor.with_floor(|f| views::tables_by_section(f.tables()))
}

/// Adds a new, available table.
pub fn add_table(floor: &FloorState, input: NewTableInput) -> Result<Table, ApiError> {
    debug!(number = input.number, section = %input.section, "add_table command");
    validate_new_table(input.number, input.capacity, &input.section)?;

    let table = Table {
        id: Uuid::new_v4().to_string(),
        number: input.number,
        capacity: input.capacity,
        status: TableStatus::Available,
        section: input.section.trim().to_string(),
        location: input.location.trim().to_string(),
    };

    floor.with_floor_mut(|f| f.add_table(table.clone()))?;
    Ok(table)
}

/// Sets the status of one table by hand.
pub fn update_table_status(
    floor: &FloorState,
    table_id: &str,
    status: TableStatus,
) -> Result<Table, ApiError> {
    debug!(%table_id, %status, "update_table_status command");

    floor.with_floor_mut(|f| match f.set_table_status(table_id, status) {
        TableUpdate::Updated => f
            .table(table_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Table", table_id)),
        TableUpdate::NotFound => Err(ApiError::not_found("Table", table_id)),
    })
}

/// Persists the current table list.
pub async fn save_table_settings(floor: &FloorState, db: &DbState) -> Result<usize, ApiError> {
    let tables = floor.with_floor(|f| f.tables().to_vec());
    db.inner().table_settings().save_tables(&tables).await?;

    info!(count = tables.len(), "Table settings saved");
    Ok(tables.len())
}

/// Replaces the floor's tables with the saved list.
///
/// Returns `false` (and leaves the floor alone) when nothing is saved.
pub async fn load_table_settings(floor: &FloorState, db: &DbState) -> Result<bool, ApiError> {
    match db.inner().table_settings().load_tables().await? {
        Some(tables) => {
            info!(count = tables.len(), "Table settings loaded");
            floor.with_floor_mut(|f| f.replace_tables(tables));
            Ok(true)
        }
        None => {
            debug!("No saved table settings");
            Ok(false)
        }
    }
}
