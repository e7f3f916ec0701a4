//! # Galley Back Office Entry Point
//!
//! ```text
//! main.rs ────► tokio runtime
//! lib.rs ─────► config, database, state, simulator, shutdown
//! ```

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for testability
    if let Err(e) = galley_backoffice::run().await {
        tracing::error!(error = %e, "Galley back office failed");
        std::process::exit(1);
    }
}
