//! Product repository for database operations.

use chrono::{DateTime, Utc};

use galleria_core::{Price, ProductDeletePolicy, ProductId};

use super::{DbPool, RepositoryError, conflict_on_unique};
use crate::models::Product;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category: String,
    price: f64,
    thumbnail_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            category: row.category,
            price,
            thumbnail_url: row.thumbnail_url,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// List all products, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any stored data is invalid.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, category, price, thumbnail_url, created_at FROM products ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        category: &str,
        price: Price,
        thumbnail_url: Option<&str>,
    ) -> Result<Product, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO products (name, category, price, thumbnail_url, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(name)
        .bind(category)
        .bind(price.as_f64())
        .bind(thumbnail_url)
        .bind(now)
        .execute(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "product name already exists"))?;

        Ok(Product {
            id: ProductId::new(result.last_insert_rowid()),
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            thumbnail_url: thumbnail_url.map(str::to_owned),
            created_at: now,
        })
    }

    /// Delete a product by name, applying the configured deletion policy to
    /// purchases that reference it. The lookup, policy handling, and delete
    /// run in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has that name.
    /// Returns `RepositoryError::Conflict` under the `Restrict` policy when
    /// purchases still reference the product.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete_by_name(
        &self,
        name: &str,
        policy: ProductDeletePolicy,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let product_id = sqlx::query_scalar::<_, i64>("SELECT id FROM products WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        match policy {
            ProductDeletePolicy::Orphan => {}
            ProductDeletePolicy::Restrict => {
                let referencing = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM purchases WHERE product_id = ?",
                )
                .bind(product_id)
                .fetch_one(&mut *tx)
                .await?;

                if referencing > 0 {
                    return Err(RepositoryError::Conflict(
                        "product is referenced by purchases".to_owned(),
                    ));
                }
            }
            ProductDeletePolicy::Cascade => {
                sqlx::query("DELETE FROM purchases WHERE product_id = ?")
                    .bind(product_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
