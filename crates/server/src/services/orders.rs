//! Order service.
//!
//! Purchase creation and listing. Creation verifies that the buyer and the
//! product exist before inserting, inside the same transaction as the
//! insert, and assigns the purchase timestamp server-side.

use thiserror::Error;

use galleria_core::{AccountId, ProductId};

use crate::db::purchases::{PurchaseCreateError, PurchaseRepository};
use crate::db::{DbPool, RepositoryError};
use crate::models::Purchase;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The buyer id does not resolve to an account.
    #[error("buyer does not exist")]
    BuyerNotFound,

    /// The product id does not resolve to a product.
    #[error("product does not exist")]
    ProductNotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order service.
pub struct OrderService<'a> {
    purchases: PurchaseRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a DbPool) -> Self {
        Self {
            purchases: PurchaseRepository::new(pool),
        }
    }

    /// Record a purchase.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::BuyerNotFound` / `OrderError::ProductNotFound`
    /// when a reference does not resolve; nothing is written in that case.
    pub async fn create_purchase(
        &self,
        buyer_id: AccountId,
        product_id: ProductId,
        payment_status: &str,
        buyer_address: &str,
    ) -> Result<Purchase, OrderError> {
        let purchase = self
            .purchases
            .create(buyer_id, product_id, payment_status, buyer_address)
            .await
            .map_err(|e| match e {
                PurchaseCreateError::BuyerNotFound(_) => OrderError::BuyerNotFound,
                PurchaseCreateError::ProductNotFound(_) => OrderError::ProductNotFound,
                PurchaseCreateError::Repository(other) => OrderError::Repository(other),
            })?;

        Ok(purchase)
    }

    /// List all purchases, unfiltered, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the database operation fails.
    pub async fn list_purchases(&self) -> Result<Vec<Purchase>, OrderError> {
        let purchases = self.purchases.list_all().await?;
        Ok(purchases)
    }
}
