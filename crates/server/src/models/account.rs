//! Account domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use galleria_core::{AccountId, Role, Username};

/// A registered account (domain type).
///
/// The stored credential is deliberately absent: repositories only attach
/// the password hash on the dedicated authentication query, so an `Account`
/// can be listed or serialized without ever carrying it.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Login name, unique across the store.
    pub username: Username,
    /// Permission level.
    pub role: Role,
    /// Display name.
    pub full_name: String,
    /// Stored shipping address, if any.
    pub address: Option<String>,
    /// Opaque payment descriptor, if any. Not validated or tokenized.
    pub payment_info: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}
