//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::GalleriaConfig;
use crate::db::DbPool;
use crate::services::{AccountService, CatalogService, OrderService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the database pool. There is no other cross-request
/// state: every operation goes through the pool.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GalleriaConfig,
    pool: DbPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: GalleriaConfig, pool: DbPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &GalleriaConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.inner.pool
    }

    /// Account service over this state's pool.
    #[must_use]
    pub fn accounts(&self) -> AccountService<'_> {
        AccountService::new(self.pool())
    }

    /// Catalog service over this state's pool, carrying the configured
    /// deletion policy.
    #[must_use]
    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(self.pool(), self.config().product_delete_policy)
    }

    /// Order service over this state's pool.
    #[must_use]
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(self.pool())
    }
}
