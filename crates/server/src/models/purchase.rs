//! Purchase domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use galleria_core::{AccountId, ProductId, PurchaseId};

/// An immutable record of a buyer purchasing a product (domain type).
///
/// Under the `orphan` deletion policy `product_id` may point at a product
/// that has since been deleted; listings surface the id as stored.
#[derive(Debug, Clone, Serialize)]
pub struct Purchase {
    /// Unique purchase ID.
    pub id: PurchaseId,
    /// Account that made the purchase.
    pub buyer_id: AccountId,
    /// Product that was purchased.
    pub product_id: ProductId,
    /// Server-assigned creation time.
    pub purchase_time: DateTime<Utc>,
    /// Free-text payment status token (e.g., "Completed").
    pub payment_status: String,
    /// Address supplied at purchase time; may differ from the account's
    /// stored address.
    pub buyer_address: String,
}
