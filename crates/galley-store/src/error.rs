//! # Store Errors
//!
//! ```text
//!   sqlx::Error ─────────┐
//!   MigrateError ────────┼──► DbError ──► ApiError (backoffice)
//!   serde_json::Error ───┘
//! ```
//!
//! A missing settings row is not an error: loads return `Ok(None)`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The database file could not be opened or the pool is closed.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - A command runs after shutdown closed the pool
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// SQLite rejected a statement (locked past the busy timeout, disk
    /// full, corrupt file).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Every pooled connection stayed busy.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// A stored value could not be encoded or decoded.
    ///
    /// ## When This Occurs
    /// - Settings row edited by hand into invalid JSON
    /// - Stored table list from an incompatible build
    #[error("Stored value for '{key}' is malformed: {reason}")]
    MalformedValue { key: String, reason: String },
}

impl DbError {
    /// Malformed value under a known settings key.
    pub fn malformed(key: impl Into<String>, err: serde_json::Error) -> Self {
        DbError::MalformedValue {
            key: key.into(),
            reason: err.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            other => DbError::QueryFailed(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Without a key; repositories use [`DbError::malformed`].
impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::malformed("unknown", err)
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_key() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = DbError::malformed("restaurant-tables", json_err);
        assert!(err
            .to_string()
            .starts_with("Stored value for 'restaurant-tables' is malformed"));
    }

    #[test]
    fn test_sqlx_error_mapping() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::QueryFailed(_)
        ));
    }
}
