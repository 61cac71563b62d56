//! Galleria server - JSON shop backend.
//!
//! This binary serves the shop API on port 8000.
//!
//! # Startup
//!
//! 1. Load configuration from the environment
//! 2. Open (or create) the `SQLite` database; run migrations
//! 3. Seed the bootstrap admin account if no admin exists
//! 4. Serve until SIGINT/SIGTERM
//!
//! Storage being unavailable at any of steps 2-3 is fatal: the process
//! aborts rather than serving against a broken store.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galleria_server::config::GalleriaConfig;
use galleria_server::services::{AccountService, SeedOutcome};
use galleria_server::state::AppState;
use galleria_server::{app, db};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = GalleriaConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "galleria_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the database and bring the schema up to date
    let pool = db::create_pool(&config.database_path)
        .await
        .expect("Failed to open database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // One-time seeding check: guarantee a single admin account exists
    let seeded = AccountService::new(&pool)
        .ensure_seed_admin(&config.bootstrap_admin)
        .await
        .expect("Failed to seed admin account");
    if seeded == SeedOutcome::Created {
        tracing::info!(
            username = %config.bootstrap_admin.username,
            "Seed admin account created"
        );
    }

    // Start server
    let addr = config.socket_addr();
    let state = AppState::new(config, pool);
    let app = app(state);

    tracing::info!("galleria listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
