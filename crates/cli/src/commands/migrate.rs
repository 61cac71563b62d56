//! Run database migrations for the shop database.

use tracing::info;

use galleria_server::db;

/// Open the database (creating it if absent) and apply pending migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = super::database_path();

    info!(path = %path.display(), "Running migrations");

    let pool = db::create_pool(&path).await?;
    db::run_migrations(&pool).await?;

    info!("Migrations complete");

    Ok(())
}
