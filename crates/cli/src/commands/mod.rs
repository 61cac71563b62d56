//! CLI command implementations.

pub mod admin;
pub mod migrate;

use std::path::PathBuf;

/// Resolve the database path the same way the server does.
pub(crate) fn database_path() -> PathBuf {
    dotenvy::dotenv().ok();
    PathBuf::from(
        std::env::var("GALLERIA_DATABASE_PATH").unwrap_or_else(|_| "galleria.db".to_string()),
    )
}
