//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the demo out of the box.
//!
//! - `GALLERIA_DATABASE_PATH` - `SQLite` database file (default: galleria.db)
//! - `GALLERIA_HOST` - Bind address (default: 127.0.0.1)
//! - `GALLERIA_PORT` - Listen port (default: 8000)
//! - `GALLERIA_ADMIN_USERNAME` - Bootstrap admin username (default: admin)
//! - `GALLERIA_ADMIN_PASSWORD` - Bootstrap admin password (default: admin)
//! - `GALLERIA_ADMIN_FULL_NAME` - Bootstrap admin display name
//!   (default: Administrator)
//! - `GALLERIA_PRODUCT_DELETE_POLICY` - What happens to purchases when a
//!   product is deleted: `orphan` | `restrict` | `cascade` (default: orphan)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use galleria_core::ProductDeletePolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Galleria server configuration.
#[derive(Debug, Clone)]
pub struct GalleriaConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Bootstrap admin account seeded on first start.
    pub bootstrap_admin: BootstrapAdminConfig,
    /// Policy applied to purchases when a product is deleted.
    pub product_delete_policy: ProductDeletePolicy,
}

/// Credentials for the seed admin account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct BootstrapAdminConfig {
    /// Admin login name.
    pub username: String,
    /// Admin password (hashed before it ever reaches the store).
    pub password: SecretString,
    /// Admin display name.
    pub full_name: String,
}

impl std::fmt::Debug for BootstrapAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdminConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .finish()
    }
}

impl GalleriaConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_path =
            PathBuf::from(get_env_or_default("GALLERIA_DATABASE_PATH", "galleria.db"));
        let host = get_env_or_default("GALLERIA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GALLERIA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("GALLERIA_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GALLERIA_PORT".to_string(), e.to_string()))?;

        let bootstrap_admin = BootstrapAdminConfig::from_env();

        let product_delete_policy = get_env_or_default("GALLERIA_PRODUCT_DELETE_POLICY", "orphan")
            .parse::<ProductDeletePolicy>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "GALLERIA_PRODUCT_DELETE_POLICY".to_string(),
                    e.to_string(),
                )
            })?;

        Ok(Self {
            database_path,
            host,
            port,
            bootstrap_admin,
            product_delete_policy,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BootstrapAdminConfig {
    fn from_env() -> Self {
        Self {
            username: get_env_or_default("GALLERIA_ADMIN_USERNAME", "admin"),
            password: SecretString::from(get_env_or_default("GALLERIA_ADMIN_PASSWORD", "admin")),
            full_name: get_env_or_default("GALLERIA_ADMIN_FULL_NAME", "Administrator"),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
