//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use galleria_core::{Price, ProductId};

/// A catalog entry (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name, unique across the catalog.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Non-negative price.
    pub price: Price,
    /// Optional thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// When the product was added.
    pub created_at: DateTime<Utc>,
}
