//! # Simulator State
//!
//! Owns the running floor simulator, if any. At most one simulator runs
//! per process: a second `start` while one is running does nothing.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::info;

use super::{FloorState, SimulatorSettings};
use crate::simulator::{Clock, FloorSimulator, SimulatorHandle};

#[derive(Debug, Default)]
pub struct SimulatorState {
    handle: Mutex<Option<SimulatorHandle>>,
}

impl SimulatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the simulator. Returns `false` if one is already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        &self,
        floor: &FloorState,
        settings: &SimulatorSettings,
        clock: Arc<dyn Clock>,
    ) -> bool {
        let mut handle = self.handle.lock().expect("Simulator mutex poisoned");
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            info!("Floor simulator already running");
            return false;
        }

        *handle = Some(FloorSimulator::spawn(floor.clone(), clock, settings));
        true
    }

    /// Stops the simulator. Returns `false` if none was running.
    pub async fn stop(&self) -> bool {
        // Take the handle out so the lock is released before awaiting
        let handle = self
            .handle
            .lock()
            .expect("Simulator mutex poisoned")
            .take();

        match handle {
            Some(handle) => {
                handle.shutdown().await;
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .expect("Simulator mutex poisoned")
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Due-soon ids published by the running simulator.
    pub fn due_soon(&self) -> Option<watch::Receiver<Vec<String>>> {
        self.handle
            .lock()
            .expect("Simulator mutex poisoned")
            .as_ref()
            .map(SimulatorHandle::due_soon)
    }
}
