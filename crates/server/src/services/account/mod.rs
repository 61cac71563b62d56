//! Account service.
//!
//! Registration, authentication, profile updates, and the one-time admin
//! seeding. This service owns the password hashing policy: credentials are
//! argon2id PHC strings, salted per hash, and plaintext never reaches the
//! store or the logs.

mod error;

pub use error::AccountError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use galleria_core::{Role, Username};

use crate::config::BootstrapAdminConfig;
use crate::db::accounts::AccountRepository;
use crate::db::{DbPool, RepositoryError};
use crate::models::Account;

/// Minimum password length for registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Result of the startup seeding check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No admin existed; the bootstrap account was created.
    Created,
    /// An admin account already existed; nothing was written.
    AlreadyPresent,
}

/// Account service.
///
/// Handles registration, login, profile updates, and admin bootstrap.
pub struct AccountService<'a> {
    accounts: AccountRepository<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a DbPool) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
        }
    }

    /// Register a new account.
    ///
    /// The password is hashed before the single-row insert; the store's
    /// unique constraint resolves concurrent registrations of the same
    /// username, surfaced here as `DuplicateUsername`.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidUsername` if the username is malformed.
    /// Returns `AccountError::WeakPassword` if the password is too short.
    /// Returns `AccountError::DuplicateUsername` if the username is taken.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
        full_name: &str,
        address: Option<&str>,
        payment_info: Option<&str>,
    ) -> Result<Account, AccountError> {
        let username = Username::parse(username)?;

        validate_password(password)?;

        let password_hash = hash_password(password)?;

        let account = self
            .accounts
            .create(
                &username,
                &password_hash,
                role,
                full_name,
                address,
                payment_info,
            )
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AccountError::DuplicateUsername,
                other => AccountError::Repository(other),
            })?;

        Ok(account)
    }

    /// Authenticate with username and password.
    ///
    /// Verification runs against the stored argon2 hash via the library's
    /// constant-time comparison. An unknown username and a wrong password
    /// are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidCredentials` on any mismatch.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        // A name that cannot be a valid username cannot name an account.
        let username =
            Username::parse(username).map_err(|_| AccountError::InvalidCredentials)?;

        let (account, password_hash) = self
            .accounts
            .get_with_password_hash(&username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(account)
    }

    /// Overwrite the mutable profile fields of an account.
    ///
    /// Role and username are not reachable from this path.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound` if the username does not exist.
    pub async fn update_profile(
        &self,
        username: &str,
        full_name: &str,
        address: Option<&str>,
        payment_info: Option<&str>,
    ) -> Result<(), AccountError> {
        let username = Username::parse(username)?;

        self.accounts
            .update_profile(&username, full_name, address, payment_info)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AccountError::NotFound,
                other => AccountError::Repository(other),
            })
    }

    /// List all accounts. Credentials are excluded by construction.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Repository` if the database operation fails.
    pub async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        let accounts = self.accounts.list_all().await?;
        Ok(accounts)
    }

    /// Ensure exactly one admin account exists, seeding the bootstrap
    /// account if none does.
    ///
    /// Runs once at process start, not per request. Re-running is a no-op,
    /// and losing a seeding race to a concurrently starting process counts
    /// as already-present. The bootstrap credential goes through the same
    /// hashing as any registration; it skips the registration-only password
    /// length rule so the well-known demo credential keeps working.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidUsername` if the configured bootstrap
    /// username is malformed, `AccountError::Repository` on storage failure.
    pub async fn ensure_seed_admin(
        &self,
        bootstrap: &BootstrapAdminConfig,
    ) -> Result<SeedOutcome, AccountError> {
        if self.accounts.admin_count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let username = Username::parse(&bootstrap.username)?;
        let password_hash = hash_password(bootstrap.password.expose_secret())?;

        match self
            .accounts
            .create(
                &username,
                &password_hash,
                Role::Admin,
                &bootstrap.full_name,
                None,
                None,
            )
            .await
        {
            Ok(_) => Ok(SeedOutcome::Created),
            // Another process seeded between our check and insert.
            Err(RepositoryError::Conflict(_)) => Ok(SeedOutcome::AlreadyPresent),
            Err(other) => Err(AccountError::Repository(other)),
        }
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AccountError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AccountError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AccountError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AccountError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse battery", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(matches!(
            verify_password("wrong password", &hash),
            Err(AccountError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_validate_password_too_short() {
        assert!(matches!(
            validate_password("short"),
            Err(AccountError::WeakPassword(_))
        ));
        assert!(validate_password("long enough").is_ok());
    }
}
