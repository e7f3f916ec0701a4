//! # Floor Simulator
//!
//! Background task that keeps the demo floor alive and drives the
//! due-soon banner.
//!
//! ## Timeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Floor Simulator Loop                                 │
//! │                                                                         │
//! │  spawn ──► publish due-soon ids (watch)                                 │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  ┌────────── select! ──────────────────────────────────────────────┐    │
//! │  │                                                                  │    │
//! │  │  flip tick ──────► pick random available/occupied table          │    │
//! │  │                    toggle it through set_table_status            │    │
//! │  │                                                                  │    │
//! │  │  refresh tick ───► due_soon(now, window) ──► watch::send         │    │
//! │  │                    (only when the id list changed)               │    │
//! │  │                                                                  │    │
//! │  │  shutdown (mpsc) ─► break                                        │    │
//! │  └──────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  Reserved and unavailable tables are never touched.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every tick takes the floor lock for one synchronous call, so a tick
//! never interleaves with a command.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use galley_core::{views, ReservationCoordinator, TableStatus};

use crate::state::{FloorState, SimulatorSettings};

// =============================================================================
// Clock
// =============================================================================

/// Wall-clock source for due-soon checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local restaurant time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stuck at one instant (tests and demos).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

// =============================================================================
// Tick Logic
// =============================================================================

/// Toggles one random available/occupied table. Returns what changed.
pub fn flip_random_table<R: Rng + ?Sized>(
    floor: &mut ReservationCoordinator,
    rng: &mut R,
) -> Option<(String, TableStatus)> {
    let candidates: Vec<(String, TableStatus)> = floor
        .tables()
        .iter()
        .filter_map(|t| match t.status {
            TableStatus::Available => Some((t.id.clone(), TableStatus::Occupied)),
            TableStatus::Occupied => Some((t.id.clone(), TableStatus::Available)),
            TableStatus::Reserved | TableStatus::Unavailable => None,
        })
        .collect();

    let (table_id, next) = candidates.choose(rng)?.clone();
    floor.set_table_status(&table_id, next);
    Some((table_id, next))
}

/// Ids of upcoming reservations inside the window, soonest first.
pub fn due_soon_ids(
    floor: &ReservationCoordinator,
    now: NaiveDateTime,
    window: chrono::Duration,
) -> Vec<String> {
    views::due_soon(floor.reservations(), now, window)
        .into_iter()
        .map(|r| r.id.clone())
        .collect()
}

// =============================================================================
// Simulator Task
// =============================================================================

/// The simulator task state. Consumed by [`FloorSimulator::run`].
pub struct FloorSimulator {
    floor: FloorState,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    flip_interval: Duration,
    refresh_interval: Duration,
    due_soon_window: chrono::Duration,
    due_tx: watch::Sender<Vec<String>>,
    shutdown_rx: mpsc::Receiver<()>,
}

/// Handle for a running simulator.
#[derive(Debug)]
pub struct SimulatorHandle {
    shutdown_tx: mpsc::Sender<()>,
    due_rx: watch::Receiver<Vec<String>>,
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Receiver for the due-soon reservation ids.
    pub fn due_soon(&self) -> watch::Receiver<Vec<String>> {
        self.due_rx.clone()
    }

    /// Whether the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the task and waits for it to exit.
    pub async fn shutdown(self) {
        // A send error means the task already exited
        if self.shutdown_tx.send(()).await.is_err() {
            debug!("Simulator already stopped");
        }
        if let Err(e) = self.task.await {
            warn!(?e, "Simulator task ended abnormally");
        }
    }
}

impl FloorSimulator {
    /// Builds the simulator and its handle without starting it.
    pub fn new(
        floor: FloorState,
        clock: Arc<dyn Clock>,
        settings: &SimulatorSettings,
    ) -> (Self, mpsc::Sender<()>, watch::Receiver<Vec<String>>) {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let window = settings.due_soon_window();
        let initial = floor.with_floor(|f| due_soon_ids(f, clock.now(), window));
        let (due_tx, due_rx) = watch::channel(initial);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let simulator = FloorSimulator {
            floor,
            clock,
            rng,
            flip_interval: settings.flip_interval(),
            refresh_interval: settings.refresh_interval(),
            due_soon_window: window,
            due_tx,
            shutdown_rx,
        };

        (simulator, shutdown_tx, due_rx)
    }

    /// Spawns the loop on the current runtime.
    pub fn spawn(
        floor: FloorState,
        clock: Arc<dyn Clock>,
        settings: &SimulatorSettings,
    ) -> SimulatorHandle {
        let (simulator, shutdown_tx, due_rx) = Self::new(floor, clock, settings);
        let task = tokio::spawn(simulator.run());
        SimulatorHandle {
            shutdown_tx,
            due_rx,
            task,
        }
    }

    /// Runs until a shutdown message arrives or the handle is dropped.
    pub async fn run(mut self) {
        info!(
            flip_secs = self.flip_interval.as_secs(),
            refresh_secs = self.refresh_interval.as_secs(),
            "Floor simulator starting"
        );

        // First ticks one period out, not immediately
        let start = Instant::now();
        let mut flip = interval_at(start + self.flip_interval, self.flip_interval);
        flip.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut refresh = interval_at(start + self.refresh_interval, self.refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = flip.tick() => self.flip(),
                _ = refresh.tick() => self.refresh(),
                _ = self.shutdown_rx.recv() => {
                    info!("Floor simulator shutting down");
                    break;
                }
            }
        }

        info!("Floor simulator stopped");
    }

    fn flip(&mut self) {
        let rng = &mut self.rng;
        match self.floor.with_floor_mut(|f| flip_random_table(f, rng)) {
            Some((table_id, status)) => debug!(%table_id, %status, "Simulated table change"),
            None => debug!("No table available to flip"),
        }
    }

    fn refresh(&mut self) {
        let now = self.clock.now();
        let window = self.due_soon_window;
        let ids = self.floor.with_floor(|f| due_soon_ids(f, now, window));

        let changed = self.due_tx.send_if_modified(|current| {
            if *current == ids {
                false
            } else {
                *current = ids;
                true
            }
        });
        if changed {
            debug!(count = self.due_tx.borrow().len(), "Due-soon list changed");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
