//! Roadshow scheduler console binary.
//!
//! Interactive front-end for the in-memory roadshow scheduling core.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin roadshow
//!
//! # With sample data preloaded:
//! ROADSHOW_DEMO_DATA=true cargo run --bin roadshow
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log level/filter (default: info)
//! - `ROADSHOW_DEMO_DATA`: preload sample presentations (default: false)
//! - `ROADSHOW_PROMPT`: prompt string (default: `roadshow> `)

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roadshow_scheduler::console::{self, ConsoleConfig};
use roadshow_scheduler::AppState;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting roadshow scheduler console");

    let config = ConsoleConfig::from_env();
    let state = AppState::new();

    if config.demo_data {
        match console::seed_demo_data(&state) {
            Ok(()) => info!("Seeded demo presentations"),
            Err(e) => warn!(error = %e, "Failed to seed demo data"),
        }
    }

    console::run(state, &config)
}
