//! Database operations for the Galleria `SQLite` store.
//!
//! # Database
//!
//! A single `SQLite` file holds the three application tables:
//!
//! - `users` - Accounts with salted password hashes (never plaintext)
//! - `products` - The catalog
//! - `purchases` - Immutable purchase log referencing users and products
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/server/migrations/` and run at
//! startup via [`run_migrations`] (or on demand through
//! `galleria-cli migrate`). Schema creation is idempotent.

pub mod accounts;
pub mod products;
pub mod purchases;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use thiserror::Error;

/// Connection pool over the shop database.
pub type DbPool = Pool<Sqlite>;

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username or product name).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Open (or create) the `SQLite` database at the given file path.
///
/// Creates the parent directory if it does not exist, enables WAL journal
/// mode and the foreign-keys pragma, and sets a 5-second busy timeout.
///
/// # Errors
///
/// Returns `sqlx::Error` if the file cannot be opened or created; callers
/// treat this as fatal at startup.
pub async fn create_pool(path: &Path) -> Result<DbPool, sqlx::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Open an in-memory `SQLite` database (for testing).
///
/// A single connection keeps the in-memory database alive for the pool's
/// lifetime.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool_in_memory() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Run the embedded schema migrations.
///
/// Safe to call repeatedly; already-applied migrations are skipped.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails; callers
/// treat this as fatal at startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations complete");
    Ok(())
}

/// Map a sqlx error to [`RepositoryError::Conflict`] when it is a unique
/// constraint violation, passing everything else through as a database
/// error.
pub(crate) fn conflict_on_unique(e: sqlx::Error, conflict_msg: &str) -> RepositoryError {
    if e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
    {
        return RepositoryError::Conflict(conflict_msg.to_owned());
    }
    RepositoryError::Database(e)
}
