//! Purchase repository for database operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

use galleria_core::{AccountId, ProductId, PurchaseId};

use super::{DbPool, RepositoryError};
use crate::models::Purchase;

/// Errors from the referential-checked purchase insert.
#[derive(Debug, Error)]
pub enum PurchaseCreateError {
    /// The buyer id does not resolve to an account.
    #[error("buyer {0} does not exist")]
    BuyerNotFound(AccountId),

    /// The product id does not resolve to a product.
    #[error("product {0} does not exist")]
    ProductNotFound(ProductId),

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for PurchaseCreateError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for purchase queries.
#[derive(Debug, sqlx::FromRow)]
struct PurchaseRow {
    id: i64,
    buyer_id: i64,
    product_id: i64,
    purchase_time: DateTime<Utc>,
    payment_status: String,
    buyer_address: String,
}

impl From<PurchaseRow> for Purchase {
    fn from(row: PurchaseRow) -> Self {
        Self {
            id: PurchaseId::new(row.id),
            buyer_id: AccountId::new(row.buyer_id),
            product_id: ProductId::new(row.product_id),
            purchase_time: row.purchase_time,
            payment_status: row.payment_status,
            buyer_address: row.buyer_address,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for purchase database operations.
pub struct PurchaseRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PurchaseRepository<'a> {
    /// Create a new purchase repository.
    #[must_use]
    pub const fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a purchase after verifying both references, all in one
    /// transaction. The purchase time is assigned here, server-side.
    ///
    /// # Errors
    ///
    /// Returns `PurchaseCreateError::BuyerNotFound` /
    /// `PurchaseCreateError::ProductNotFound` when a reference does not
    /// resolve, and `PurchaseCreateError::Repository` for storage failures.
    pub async fn create(
        &self,
        buyer_id: AccountId,
        product_id: ProductId,
        payment_status: &str,
        buyer_address: &str,
    ) -> Result<Purchase, PurchaseCreateError> {
        let mut tx = self.pool.begin().await?;

        let buyer_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
                .bind(buyer_id.as_i64())
                .fetch_one(&mut *tx)
                .await?;
        if !buyer_exists {
            return Err(PurchaseCreateError::BuyerNotFound(buyer_id));
        }

        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = ?)")
                .bind(product_id.as_i64())
                .fetch_one(&mut *tx)
                .await?;
        if !product_exists {
            return Err(PurchaseCreateError::ProductNotFound(product_id));
        }

        let purchase_time = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO purchases (buyer_id, product_id, purchase_time, payment_status, buyer_address)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(buyer_id.as_i64())
        .bind(product_id.as_i64())
        .bind(purchase_time)
        .bind(payment_status)
        .bind(buyer_address)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Purchase {
            id: PurchaseId::new(result.last_insert_rowid()),
            buyer_id,
            product_id,
            purchase_time,
            payment_status: payment_status.to_owned(),
            buyer_address: buyer_address.to_owned(),
        })
    }

    /// List all purchases, ordered by id for deterministic output.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Purchase>, RepositoryError> {
        let rows = sqlx::query_as::<_, PurchaseRow>(
            r"
            SELECT id, buyer_id, product_id, purchase_time, payment_status, buyer_address
            FROM purchases
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
