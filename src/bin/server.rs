//! Taskboard REST server binary.
//!
//! Wires the `PostgreSQL`-backed task store into the lifecycle service and
//! serves the REST surface.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 0.0.0.0:8080
//! cargo run --bin server
//!
//! # Run on a custom address with an explicit database
//! cargo run --bin server -- --bind 127.0.0.1:8080 \
//!     --database-url postgres://localhost/taskboard
//! ```

use std::sync::Arc;

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use taskboard::config::{CliArgs, ServerConfig};
use taskboard::http;
use taskboard::task::adapters::postgres::{PostgresTaskStore, TaskPgPool};
use taskboard::task::services::TaskLifecycleService;

#[tokio::main]
#[expect(
    clippy::print_stderr,
    reason = "configuration failures are reported before tracing is initialised"
)]
async fn main() {
    let cli = CliArgs::parse();

    let config = match ServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, "starting taskboard server");

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool: TaskPgPool = match Pool::builder().build(manager) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "failed to create database pool");
            std::process::exit(1);
        }
    };

    let store = Arc::new(PostgresTaskStore::new(pool));
    let service = Arc::new(TaskLifecycleService::new(store, Arc::new(DefaultClock)));

    match http::start_server(&config.bind_addr, service).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "taskboard server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start server");
            std::process::exit(1);
        }
    }
}
