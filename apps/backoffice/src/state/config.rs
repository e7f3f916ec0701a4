//! # Configuration State
//!
//! Configuration loaded once at startup.
//!
//! ## Load Order (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`GALLEY_CONFIG`, else `backoffice.toml` in the platform
//!    config directory)
//! 3. Environment variables (`GALLEY_*`)
//!
//! ## Example `backoffice.toml`
//! ```toml
//! restaurant_name = "Harbor Lights"
//! db_path = "/var/lib/galley/galley.db"
//!
//! [simulator]
//! enabled = true
//! flip_interval_secs = 30
//! refresh_interval_secs = 60
//! due_soon_minutes = 30
//! ```
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why the config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Longest due-soon look-ahead accepted: one week.
pub const MAX_DUE_SOON_MINUTES: i64 = 7 * 24 * 60;

/// Back-office configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in logs and on the web UI header.
    pub restaurant_name: String,

    /// SQLite file. `None` uses the platform data directory.
    pub db_path: Option<PathBuf>,

    /// Floor simulator settings.
    pub simulator: SimulatorSettings,
}

/// How the floor simulator behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    /// Start the simulator at boot.
    pub enabled: bool,

    /// Seconds between random table flips.
    pub flip_interval_secs: u64,

    /// Seconds between due-soon recomputations.
    pub refresh_interval_secs: u64,

    /// Look-ahead window for due-soon reservations.
    pub due_soon_minutes: i64,

    /// Fixed RNG seed for reproducible demos.
    pub seed: Option<u64>,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        SimulatorSettings {
            enabled: true,
            flip_interval_secs: 30,
            refresh_interval_secs: 60,
            due_soon_minutes: 30,
            seed: None,
        }
    }
}

impl SimulatorSettings {
    pub fn flip_interval(&self) -> Duration {
        Duration::from_secs(self.flip_interval_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn due_soon_window(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.due_soon_minutes)
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            restaurant_name: "Galley Dev Kitchen".to_string(),
            db_path: None,
            simulator: SimulatorSettings::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from defaults, file, and environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = ConfigState::default();

        let path = config_path
            .or_else(|| std::env::var("GALLEY_CONFIG").ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns the defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `GALLEY_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("GALLEY_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.db_path = Some(PathBuf::from(path));
        }

        if let Some(name) = lookup("GALLEY_RESTAURANT_NAME") {
            self.restaurant_name = name;
        }

        if let Some(flag) = lookup("GALLEY_SIMULATOR") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "on" => self.simulator.enabled = true,
                "0" | "false" | "off" => self.simulator.enabled = false,
                _ => warn!(value = %flag, "Unknown GALLEY_SIMULATOR value"),
            }
        }

        parse_override(&lookup, "GALLEY_FLIP_INTERVAL_SECS", &mut self.simulator.flip_interval_secs);
        parse_override(
            &lookup,
            "GALLEY_REFRESH_INTERVAL_SECS",
            &mut self.simulator.refresh_interval_secs,
        );
        parse_override(&lookup, "GALLEY_DUE_SOON_MINUTES", &mut self.simulator.due_soon_minutes);
    }

    /// Intervals must be positive (tokio panics on a zero period) and the
    /// due-soon window must lie in `1..=MAX_DUE_SOON_MINUTES`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulator.flip_interval_secs == 0 || self.simulator.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "simulator intervals must be greater than 0".into(),
            ));
        }

        if !(1..=MAX_DUE_SOON_MINUTES).contains(&self.simulator.due_soon_minutes) {
            return Err(ConfigError::Invalid(format!(
                "due_soon_minutes must be between 1 and {}",
                MAX_DUE_SOON_MINUTES
            )));
        }

        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "galley", "backoffice")
            .map(|dirs| dirs.config_dir().join("backoffice.toml"))
    }
}

fn parse_override<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.parse() {
            Ok(value) => *target = value,
            Err(_) => warn!(key, value = %raw, "Ignoring unparseable override"),
        }
    }
}
