//! Configuration retrieval for the web UI.

use serde::Serialize;

use crate::state::{ConfigState, SimulatorSettings};

/// What the UI needs from the configuration. The database path stays
/// server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub restaurant_name: String,
    pub simulator: SimulatorResponse,
}

/// Simulator settings in the camelCase wire shape. The TOML file keeps
/// snake_case keys, so this is a separate type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorResponse {
    pub enabled: bool,
    pub flip_interval_secs: u64,
    pub refresh_interval_secs: u64,
    pub due_soon_minutes: i64,
    pub seed: Option<u64>,
}

impl From<&SimulatorSettings> for SimulatorResponse {
    fn from(settings: &SimulatorSettings) -> Self {
        SimulatorResponse {
            enabled: settings.enabled,
            flip_interval_secs: settings.flip_interval_secs,
            refresh_interval_secs: settings.refresh_interval_secs,
            due_soon_minutes: settings.due_soon_minutes,
            seed: settings.seed,
        }
    }
}

pub fn get_config(config: &ConfigState) -> ConfigResponse {
    ConfigResponse {
        restaurant_name: config.restaurant_name.clone(),
        simulator: SimulatorResponse::from(&config.simulator),
    }
}
