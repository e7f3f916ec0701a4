//! # Database State
//!
//! Wraps the `Database` handle for commands.
//!
//! ## Thread Safety
//! `Database` holds a `SqlitePool`, which is already thread-safe; commands
//! share it without extra locking.

use galley_store::Database;

#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let tables = db_state.inner().table_settings().load_tables().await?;
    /// ```
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
