//! # Galley Back Office Library
//!
//! The back-of-house service: configuration, database, in-memory floor and
//! order book, the floor simulator, and the command functions the web UI
//! calls.
//!
//! ## Module Organization
//! ```text
//! galley_backoffice/
//! ├── lib.rs          ◄─── You are here (startup & shutdown)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── TOML + env configuration
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── floor.rs    ◄─── Reservation coordinator behind a mutex
//! │   ├── orders.rs   ◄─── Purchase-order book behind a mutex
//! │   └── simulator.rs◄─── Start-once / stop for the simulator
//! ├── commands/       ◄─── Table, reservation, purchase-order, config
//! ├── simulator.rs    ◄─── Periodic table flips and due-soon refresh
//! ├── notifier.rs     ◄─── Notifications into the log
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod notifier;
pub mod simulator;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use galley_core::{PurchaseOrderBook, ReservationCoordinator};
use galley_store::{Database, DbConfig, DbError};

use error::ApiError;
use notifier::TracingNotifier;
use simulator::SystemClock;
use state::{default_floor, ConfigState, DbState, FloorState, OrderState, SimulatorState};

/// The managed state of a running back office.
///
/// The commands in [`commands`] are a library surface: the host that
/// serves the web UI owns a `Backoffice` and passes its fields to them.
pub struct Backoffice {
    pub config: ConfigState,
    pub db: DbState,
    pub floor: FloorState,
    pub orders: OrderState,
    pub simulator: SimulatorState,
}

impl Backoffice {
    /// Connects the database and restores the floor.
    ///
    /// Unreadable table settings fall back to the default floor plan.
    /// The simulator is not started here.
    pub async fn open(config: ConfigState, db_config: DbConfig) -> Result<Self, DbError> {
        let db = DbState::new(Database::new(db_config).await?);
        info!("Database connected and migrations applied");

        let notifier = Arc::new(TracingNotifier);
        let tables = match db.inner().table_settings().load_tables().await {
            Ok(Some(tables)) => tables,
            Ok(None) => {
                info!("No saved table settings, using default floor");
                default_floor()
            }
            Err(e) => {
                warn!(error = %e, "Saved table settings unreadable, using default floor");
                default_floor()
            }
        };

        let floor = FloorState::new(ReservationCoordinator::with_notifier(
            tables,
            Vec::new(),
            notifier.clone(),
        ));
        let orders = OrderState::new(PurchaseOrderBook::with_notifier(
            Vec::new(),
            Vec::new(),
            notifier,
        ));
        info!("State initialized");

        Ok(Backoffice {
            config,
            db,
            floor,
            orders,
            simulator: SimulatorState::new(),
        })
    }

    /// Starts the floor simulator when the configuration enables it.
    pub fn start_simulator(&self) -> bool {
        self.config.simulator.enabled
            && self
                .simulator
                .start(&self.floor, &self.config.simulator, Arc::new(SystemClock))
    }

    /// Stops the simulator, saves the tables and closes the pool.
    pub async fn shutdown(self) -> Result<(), ApiError> {
        self.simulator.stop().await;
        commands::table::save_table_settings(&self.floor, &self.db).await?;
        self.db.inner().close().await;
        Ok(())
    }
}

/// Runs the service until Ctrl-C.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Service Lifecycle                                 │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → backoffice.toml → GALLEY_* env                         │
/// │                                                                         │
/// │  2. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  3. Restore Floor ────────────────────────────────────────────────────► │
/// │     • saved "restaurant-tables", else the default floor plan            │
/// │                                                                         │
/// │  4. Start Floor Simulator (if enabled) ───────────────────────────────► │
/// │                                                                         │
/// │  5. Wait for Ctrl-C ──────────────────────────────────────────────────► │
/// │                                                                         │
/// │  6. Shutdown ─────────────────────────────────────────────────────────► │
/// │     • stop simulator, save tables, close pool                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConfigState::load_or_default(None);
    info!(restaurant = %config.restaurant_name, "Starting Galley back office");

    let db_path = get_database_path(&config)?;
    info!(?db_path, "Database path determined");

    let backoffice = Backoffice::open(config, DbConfig::new(db_path)).await?;
    backoffice.start_simulator();

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");

    backoffice.shutdown().await?;
    info!("Galley back office stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=galley=trace` - Show trace for galley crates only
/// - Default: `info,galley=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,galley=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path.
///
/// `db_path` from the configuration wins; otherwise `galley.db` in the
/// platform data directory, which is created if missing.
fn get_database_path(config: &ConfigState) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = &config.db_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "galley", "backoffice")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("galley.db"))
}
