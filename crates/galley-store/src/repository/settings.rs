//! # Table Settings Repository
//!
//! The floor plan is the only state that survives a restart. It is stored
//! as one JSON array under a fixed settings key.
//!
//! ```text
//!   settings
//!   ┌─────────────────────┬──────────────────────────────────┬──────────────┐
//!   │ key                 │ value                            │ updated_at   │
//!   ├─────────────────────┼──────────────────────────────────┼──────────────┤
//!   │ restaurant-tables   │ [{"id":"t1","number":1,...},...] │ 2025-05-03T… │
//!   └─────────────────────┴──────────────────────────────────┴──────────────┘
//! ```
//!
//! The JSON is not versioned; a stored array that no longer decodes is
//! reported as [`DbError::MalformedValue`](crate::error::DbError).

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use galley_core::{Table, TABLES_STORAGE_KEY};

/// Repository for the persisted table list.
#[derive(Debug, Clone)]
pub struct TableSettingsRepository {
    pool: SqlitePool,
}

impl TableSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        TableSettingsRepository { pool }
    }

    // =========================================================================
    // Table list
    // =========================================================================

    /// Loads the saved table list, or `None` if nothing was ever saved.
    pub async fn load_tables(&self) -> DbResult<Option<Vec<Table>>> {
        let tables: Option<Vec<Table>> = self.get_json(TABLES_STORAGE_KEY).await?;
        debug!(
            count = tables.as_ref().map(Vec::len),
            "Loaded table settings"
        );
        Ok(tables)
    }

    /// Replaces the saved table list.
    pub async fn save_tables(&self, tables: &[Table]) -> DbResult<()> {
        self.put_json(TABLES_STORAGE_KEY, tables).await?;
        info!(count = tables.len(), "Saved table settings");
        Ok(())
    }

    /// Forgets the saved table list. Returns whether anything was removed.
    pub async fn clear_tables(&self) -> DbResult<bool> {
        let removed = self.delete(TABLES_STORAGE_KEY).await?;
        info!(removed, "Cleared table settings");
        Ok(removed)
    }

    // =========================================================================
    // Generic JSON values
    // =========================================================================

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> DbResult<Option<T>> {
        let raw: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        raw.map(|value| serde_json::from_str(&value).map_err(|e| DbError::malformed(key, e)))
            .transpose()
    }

    async fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DbResult<()> {
        let encoded = serde_json::to_string(value).map_err(|e| DbError::malformed(key, e))?;

        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(encoded)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM settings WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
