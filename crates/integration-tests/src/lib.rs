//! Integration tests for Galleria.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p galleria-integration-tests
//! ```
//!
//! Every test runs against its own in-memory `SQLite` database with the
//! real migrations applied, so tests are hermetic and need no external
//! services.
//!
//! # Test Categories
//!
//! - `accounts` - Registration, authentication, profile updates
//! - `catalog` - Product listing, creation, deletion policies
//! - `orders` - Purchase creation and listing
//! - `seed_admin` - Bootstrap admin idempotence
//! - `http` - The router end to end, including error bodies

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::IpAddr;
use std::path::PathBuf;

use secrecy::SecretString;

use galleria_core::ProductDeletePolicy;
use galleria_server::config::{BootstrapAdminConfig, GalleriaConfig};
use galleria_server::db::{self, DbPool};
use galleria_server::services::{AccountService, CatalogService, OrderService};
use galleria_server::state::AppState;

/// A fresh in-memory database plus the services and router built over it.
pub struct TestContext {
    pool: DbPool,
    config: GalleriaConfig,
}

impl TestContext {
    /// Create a context with the default configuration (orphan deletion
    /// policy, `admin`/`admin` bootstrap credentials).
    ///
    /// # Panics
    ///
    /// Panics if the in-memory database cannot be set up; tests cannot
    /// proceed without it.
    pub async fn new() -> Self {
        Self::with_delete_policy(ProductDeletePolicy::Orphan).await
    }

    /// Create a context with a specific product deletion policy.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory database cannot be set up.
    pub async fn with_delete_policy(policy: ProductDeletePolicy) -> Self {
        let pool = db::create_pool_in_memory()
            .await
            .expect("failed to open in-memory database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        let config = GalleriaConfig {
            database_path: PathBuf::from(":memory:"),
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            bootstrap_admin: Self::bootstrap_admin(),
            product_delete_policy: policy,
        };

        Self { pool, config }
    }

    /// The default bootstrap admin credentials used by the tests.
    #[must_use]
    pub fn bootstrap_admin() -> BootstrapAdminConfig {
        BootstrapAdminConfig {
            username: "admin".to_string(),
            password: SecretString::from("admin"),
            full_name: "Administrator".to_string(),
        }
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Account service over the test database.
    #[must_use]
    pub fn accounts(&self) -> AccountService<'_> {
        AccountService::new(&self.pool)
    }

    /// Catalog service over the test database, using the context's policy.
    #[must_use]
    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(&self.pool, self.config.product_delete_policy)
    }

    /// Order service over the test database.
    #[must_use]
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(&self.pool)
    }

    /// The full router over this context's database and configuration.
    #[must_use]
    pub fn app(&self) -> axum::Router {
        let state = AppState::new(self.config.clone(), self.pool.clone());
        galleria_server::app(state)
    }
}
