//! Account repository for database operations.
//!
//! Queries are runtime-checked (`sqlx::query`/`query_as` with binds); row
//! structs decode to primitives and convert into domain types, surfacing
//! invalid stored data as `RepositoryError::DataCorruption`.

use chrono::{DateTime, Utc};

use galleria_core::{AccountId, Role, Username};

use super::{DbPool, RepositoryError, conflict_on_unique};
use crate::models::Account;

/// Columns selected whenever the credential must stay behind.
const ACCOUNT_COLUMNS: &str =
    "id, username, role, full_name, address, payment_info, created_at, updated_at";

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for account queries. Never includes the password hash.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    role: String,
    full_name: String,
    address: Option<String>,
    payment_info: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = RepositoryError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let username = Username::parse(&row.username).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid username in database: {e}"))
        })?;

        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid role in database: {e}")))?;

        Ok(Self {
            id: AccountId::new(row.id),
            username,
            role,
            full_name: row.full_name,
            address: row.address,
            payment_info: row.payment_info,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Internal row type for the authentication query only.
#[derive(Debug, sqlx::FromRow)]
struct AccountWithHashRow {
    id: i64,
    username: String,
    role: String,
    full_name: String,
    address: Option<String>,
    payment_info: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    password_hash: String,
}

impl AccountWithHashRow {
    fn into_parts(self) -> Result<(Account, String), RepositoryError> {
        let hash = self.password_hash.clone();
        let account = AccountRow {
            id: self.id,
            username: self.username,
            role: self.role,
            full_name: self.full_name,
            address: self.address,
            payment_info: self.payment_info,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .try_into()?;
        Ok((account, hash))
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for account database operations.
pub struct AccountRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new account with an already-hashed credential.
    ///
    /// The unique constraint on `username` is what closes the concurrent
    /// registration race; a violation surfaces as `RepositoryError::Conflict`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &Username,
        password_hash: &str,
        role: Role,
        full_name: &str,
        address: Option<&str>,
        payment_info: Option<&str>,
    ) -> Result<Account, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO users (username, password_hash, role, full_name, address, payment_info, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(username.as_str())
        .bind(password_hash)
        .bind(role.to_string())
        .bind(full_name)
        .bind(address)
        .bind(payment_info)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "username already exists"))?;

        Ok(Account {
            id: AccountId::new(result.last_insert_rowid()),
            username: username.clone(),
            role,
            full_name: full_name.to_owned(),
            address: address.map(str::to_owned),
            payment_info: payment_info.map(str::to_owned),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get an account by its login name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn get_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an account by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn get_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an account together with its stored password hash.
    ///
    /// Returns `None` if the username is unknown; the caller decides how to
    /// fold that into its credential error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn get_with_password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<(Account, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountWithHashRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS}, password_hash FROM users WHERE username = ?"
        ))
        .bind(username.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(AccountWithHashRow::into_parts).transpose()
    }

    /// Overwrite the mutable profile fields of an account.
    ///
    /// Role, username, and the credential are never touched here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the username does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_profile(
        &self,
        username: &Username,
        full_name: &str,
        address: Option<&str>,
        payment_info: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET full_name = ?, address = ?, payment_info = ?, updated_at = ?
            WHERE username = ?
            ",
        )
        .bind(full_name)
        .bind(address)
        .bind(payment_info)
        .bind(Utc::now())
        .bind(username.as_str())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// List all accounts, ordered by id. The credential is never selected.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any stored data is invalid.
    pub async fn list_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users ORDER BY id ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Count accounts holding the admin role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn admin_count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(Role::Admin.to_string())
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
