//! # Repository Module
//!
//! Repositories hide SQL behind typed methods.
//!
//! ```text
//!   command ──► db.table_settings().save_tables(&tables)
//!                     │
//!                     ▼
//!               TableSettingsRepository ──► settings(key, value, updated_at)
//! ```
//!
//! ## Available Repositories
//!
//! - [`settings::TableSettingsRepository`] - Persisted table list

pub mod settings;
