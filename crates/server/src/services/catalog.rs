//! Catalog service.
//!
//! Product listing, creation, and deletion. Price validation happens here,
//! before anything reaches the store; deletion honours the configured
//! [`ProductDeletePolicy`].

use thiserror::Error;

use galleria_core::{Price, PriceError, ProductDeletePolicy};

use crate::db::products::ProductRepository;
use crate::db::{DbPool, RepositoryError};
use crate::models::Product;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Rejected price (negative or non-finite).
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// Product name already taken.
    #[error("product name already taken")]
    DuplicateName,

    /// Product not found.
    #[error("product not found")]
    NotFound,

    /// Deletion refused under the restrict policy.
    #[error("product is referenced by purchases")]
    InUse,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Catalog service.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
    delete_policy: ProductDeletePolicy,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a DbPool, delete_policy: ProductDeletePolicy) -> Self {
        Self {
            products: ProductRepository::new(pool),
            delete_policy,
        }
    }

    /// List all products, ordered by id. Unrestricted read.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the database operation fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.products.list_all().await?;
        Ok(products)
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` before any insert happens.
    /// Returns `CatalogError::DuplicateName` on a name collision.
    pub async fn add_product(
        &self,
        name: &str,
        category: &str,
        price: f64,
        thumbnail_url: Option<&str>,
    ) -> Result<Product, CatalogError> {
        let price = Price::new(price)?;

        let product = self
            .products
            .create(name, category, price, thumbnail_url)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => CatalogError::DuplicateName,
                other => CatalogError::Repository(other),
            })?;

        Ok(product)
    }

    /// Delete a product by name.
    ///
    /// What happens to purchases referencing it follows the configured
    /// policy; under `orphan` (the default) they keep their dangling
    /// product id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has that name.
    /// Returns `CatalogError::InUse` under the restrict policy when
    /// purchases still reference the product.
    pub async fn delete_product(&self, name: &str) -> Result<(), CatalogError> {
        self.products
            .delete_by_name(name, self.delete_policy)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                RepositoryError::Conflict(_) => CatalogError::InUse,
                other => CatalogError::Repository(other),
            })
    }
}
