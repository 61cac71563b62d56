//! Create admin accounts out-of-band.

use tracing::info;

use galleria_core::Role;
use galleria_server::db;
use galleria_server::services::AccountService;

/// Create an admin account with the given credentials.
///
/// Goes through the same registration path as the API, so the password is
/// validated and hashed identically.
///
/// # Errors
///
/// Returns an error if the database is unavailable, the username is taken,
/// or the password fails validation.
pub async fn create_account(
    username: &str,
    password: &str,
    full_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::database_path();

    let pool = db::create_pool(&path).await?;
    db::run_migrations(&pool).await?;

    let account = AccountService::new(&pool)
        .register(username, password, Role::Admin, full_name, None, None)
        .await?;

    info!(id = %account.id, username = %account.username, "Admin account created");

    Ok(())
}
